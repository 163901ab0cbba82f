//! Reference scenario replay
//!
//! Walks one collection through add, set and remove, including the two
//! rejected operations, and logs every version it produces.

use anyhow::{bail, Result};
use facet_core::define_schema;
use facet_core::ecs::{CollectionError, ComponentCollection, Schema};

use crate::settings::Settings;

define_schema! {
    /// Two-component schema used by the replay.
    pub schema Demo(DemoId, DemoState) in demo {
        Foo: i32,
        Bar: String,
    }
}

pub type DemoCollection = ComponentCollection<Demo>;

/// Resolve component names against the demo schema.
pub fn resolve_universe(names: &[String]) -> Result<Vec<DemoId>> {
    names
        .iter()
        .map(|name| {
            match Demo::ALL.iter().find(|&&id| Demo::name_of(id) == name.as_str()) {
                Some(&id) => Ok(id),
                None => bail!("unknown component '{name}' in universe"),
            }
        })
        .collect()
}

/// Replay the scenario and return every collection version it produced.
pub fn run(settings: &Settings) -> Result<Vec<DemoCollection>> {
    let universe = resolve_universe(&settings.universe)?;

    let c0 = DemoCollection::create(universe, []);
    log_version(settings, "create", &c0);

    let c1 = c0.add_component::<demo::Foo>(42)?;
    log_version(settings, "add Foo=42", &c1);

    expect_rejection(c1.add_component::<demo::Foo>(7), "add Foo=7")?;

    let c2 = c1.set_component::<demo::Bar>("x".to_string());
    log_version(settings, "set Bar=\"x\"", &c2);

    let c3 = c2.remove_component::<demo::Foo>()?;
    log_version(settings, "remove Foo", &c3);

    expect_rejection(c3.remove_component::<demo::Foo>(), "remove Foo")?;

    Ok(vec![c0, c1, c2, c3])
}

fn expect_rejection(
    result: Result<DemoCollection, CollectionError<DemoId>>,
    step: &str,
) -> Result<()> {
    match result {
        Ok(_) => bail!("step '{step}' was expected to fail"),
        Err(err) => {
            tracing::info!(step, %err, "rejected");
            Ok(())
        }
    }
}

fn log_version(settings: &Settings, step: &str, collection: &DemoCollection) {
    tracing::info!(
        step,
        components = collection.len(),
        signature = collection.signature().id(),
        "{:?}",
        collection.states().collect::<Vec<_>>()
    );
    if settings.print_archetypes {
        tracing::info!(step, "archetype {:?}", collection.archetype().collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_universe() {
        let ids = resolve_universe(&["Bar".to_string(), "Foo".to_string()]).unwrap();
        assert_eq!(ids, vec![DemoId::Bar, DemoId::Foo]);
        assert!(resolve_universe(&["Baz".to_string()]).is_err());
    }

    #[test]
    fn test_replay_with_defaults() {
        let versions = run(&Settings::default()).unwrap();
        assert_eq!(versions.len(), 4);

        let c3 = &versions[3];
        assert!(!c3.has_component(DemoId::Foo));
        assert_eq!(c3.component::<demo::Bar>(), Some(&"x".to_string()));
        assert!(versions[0].is_empty());
    }

    #[test]
    fn test_replay_with_narrow_universe() {
        let settings = Settings {
            universe: vec!["Foo".to_string()],
            ..Settings::default()
        };
        let versions = run(&settings).unwrap();
        assert!(!versions[0].is_known(DemoId::Bar));
        assert!(versions[2].has_component(DemoId::Bar));
    }

    #[test]
    fn test_replay_rejects_unknown_names() {
        let settings = Settings {
            universe: vec!["Nope".to_string()],
            ..Settings::default()
        };
        assert!(run(&settings).is_err());
    }
}
