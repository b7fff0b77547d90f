//! JSON configuration file with dotted-key lookups.
//!
//! Backed by the `config` crate. Values are addressed by path
//! (`database.host`, `server.appPort`) and scalars convert freely, so
//! `"port": 5432` and `"port": "5432"` read back the same. Typed sections are
//! built on top through [`FromConfigFile`].

use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Trait for configuration sections that can be loaded from a [`ConfigFile`]
pub trait FromConfigFile: Sized {
    fn from_config_file(file: &ConfigFile) -> Result<Self, ConfigError>;
}

/// Parsed JSON configuration file
#[derive(Clone, Debug)]
pub struct ConfigFile {
    path: PathBuf,
    inner: Config,
}

impl ConfigFile {
    /// Read and parse a JSON config file.
    ///
    /// A missing file or invalid JSON is an error; nothing is defaulted at
    /// this stage.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let inner = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json))
            .build()
            .map_err(|source| ConfigError::Load {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Parse config from an in-memory JSON document
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let inner = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Json))
            .build()
            .map_err(|source| ConfigError::Load {
                path: "<inline>".to_string(),
                source,
            })?;

        Ok(Self {
            path: PathBuf::new(),
            inner,
        })
    }

    /// Path the config was loaded from (empty for inline configs)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a dotted key and render scalar values as a string.
    ///
    /// Tables, arrays and `null` yield `None`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.inner.get_string(key).ok()
    }

    /// Look up a key that must be present
    pub fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.get_string(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Look up a key, falling back to `default` when absent
    pub fn string_or_default(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    /// Look up a required key and deserialize it into `T`
    pub fn parse_required<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        self.inner.get::<T>(key).map_err(|err| match err {
            config::ConfigError::NotFound(_) => ConfigError::MissingKey(key.to_string()),
            other => ConfigError::ParseError {
                key: key.to_string(),
                details: other.to_string(),
            },
        })
    }
}
