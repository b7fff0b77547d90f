use crate::{ConfigError, ConfigFile, FromConfigFile};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Display name, logged on startup
    pub app_name: String,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromConfigFile for ServerConfig {
    /// Reads the `server` section:
    /// - `server.appName` (required)
    /// - `server.appPort` (required)
    /// - `server.host` (optional, defaults to 0.0.0.0)
    fn from_config_file(file: &ConfigFile) -> Result<Self, ConfigError> {
        Ok(Self {
            app_name: file.required("server.appName")?,
            host: file.string_or_default("server.host", &Ipv4Addr::UNSPECIFIED.to_string()),
            port: file.parse_required("server.appPort")?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            app_name: "inventory-api".to_string(),
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}
