use core_config::{ConfigError, ConfigFile, FromConfigFile, env_or_default, server::ServerConfig};
use database::sql::SqlConfig;
use std::path::Path;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes the shared sections read from the JSON config file
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: SqlConfig,
}

impl Config {
    /// Load from `$CONFIG_PATH`, defaulting to `config.json` in the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(env_or_default("CONFIG_PATH", "config.json"))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(path)?;

        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_config_file(&file)?,
            database: SqlConfig::from_config_file(&file)?,
        })
    }
}
