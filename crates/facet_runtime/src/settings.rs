//! Settings management

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Component names making up the replayed collection's universe.
    pub universe: Vec<String>,
    /// Log the archetype table after every step.
    pub print_archetypes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            universe: vec!["Foo".to_string(), "Bar".to_string()],
            print_archetypes: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_json(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "log_level": "trace" }"#).unwrap();
        assert_eq!(settings.log_level, "trace");
        assert_eq!(settings.universe, vec!["Foo", "Bar"]);
        assert!(settings.print_archetypes);
    }

    #[test]
    fn test_full_json() {
        let settings = Settings::from_json(
            r#"{ "log_level": "warn", "universe": ["Bar"], "print_archetypes": false }"#,
        )
        .unwrap();
        assert_eq!(settings.universe, vec!["Bar"]);
        assert!(!settings.print_archetypes);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Settings::from_json("{ log_level: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/facet.json"))).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
