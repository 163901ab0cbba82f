//! Facet Runtime
//!
//! Minimal binary that loads settings, sets up logging and replays the
//! reference collection scenario.

mod replay;
mod settings;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::settings::Settings;

fn main() -> Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref()).context("loading settings")?;

    let level: tracing::Level = settings
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", settings.log_level))?;

    // Initialize logging
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!("Facet v{}", facet_core::VERSION);
    let versions = replay::run(&settings)?;
    tracing::info!(versions = versions.len(), "Replay finished");

    Ok(())
}
