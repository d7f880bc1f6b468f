use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backing file for the item store.
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/items.txt"),
        }
    }
}

/// Settings consumed by the table UI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds between automatic table refreshes.
    pub auto_refresh_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            auto_refresh_secs: 3600,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

/// Configuration manager
pub struct ConfigManager {
    /// Path to global config directory (~/.shelfwatch/)
    global_config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager
    pub fn new() -> ConfigResult<Self> {
        let global_config_dir = Self::get_global_config_dir()?;

        // Ensure global config directory exists
        std::fs::create_dir_all(&global_config_dir)?;

        Ok(Self { global_config_dir })
    }

    /// Returns the global config directory path
    fn get_global_config_dir() -> ConfigResult<PathBuf> {
        dirs::home_dir()
            .map(|p| p.join(".shelfwatch"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Returns path to global config file
    pub fn global_config_path(&self) -> PathBuf {
        self.global_config_dir.join("config.toml")
    }

    /// Loads global configuration
    pub fn load_global_config(&self) -> ConfigResult<GlobalConfig> {
        let path = self.global_config_path();
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: GlobalConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves global configuration
    pub fn save_global_config(&self, config: &GlobalConfig) -> ConfigResult<()> {
        let path = self.global_config_path();
        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
