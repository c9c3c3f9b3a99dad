use crate::storage::{config_manager::LogConfig, file_manager::FileManager};
use anyhow::{anyhow, Context, Result};
use std::{fs::OpenOptions, sync::Mutex};
use tracing::Level;

/// Sends `tracing` output to the log file named in the config.
///
/// The terminal belongs to the UI while the app runs, so nothing is ever logged to stdout or
/// stderr. Does nothing if logging is disabled.
///
/// # Errors
/// Returns an error if the level is not a valid log level, the log file can't be opened, or a
/// global subscriber has already been installed.
pub fn init(file_manager: &FileManager, config: &LogConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let path = file_manager.path_to(&config.file);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Could not set up logging")?;

    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        anyhow!("'{level}' is not a log level. Use one of: trace, debug, info, warn, error.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_levels() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level(" DEBUG ").unwrap(), Level::DEBUG);
        assert!(parse_level("loud").is_err());
    }
}
