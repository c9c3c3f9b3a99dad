use super::file_manager::FileManager;
use crate::model::category::Category;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Config {
    /// The category selected when the app opens.
    pub default_category: Category,
    pub log: LogConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: String,
    /// Log file path, relative to the data directory.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: "produce-list.log".to_string(),
        }
    }
}

pub struct ConfigManager<'a> {
    file_manager: &'a FileManager,
}

impl<'a> ConfigManager<'a> {
    #[must_use]
    pub fn new(file_manager: &'a FileManager) -> Self {
        Self { file_manager }
    }

    /// Reads the config file, falling back to the defaults if there isn't one.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read, or if it
    /// can be read but isn't in the correct format.
    pub fn read_config(&self) -> Result<Config> {
        if !self.file_manager.has_data_file(CONFIG_FILE_NAME) {
            return Ok(Config::default());
        }

        let file = self
            .file_manager
            .read_data(CONFIG_FILE_NAME)
            .with_context(|| format!("Could not read config file '{CONFIG_FILE_NAME}'"))?;
        let config: Config = toml::from_str(file.as_str())
            .with_context(|| format!("Could not parse config file '{CONFIG_FILE_NAME}'"))?;
        Ok(config)
    }
}
