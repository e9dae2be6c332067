//! Configuration management for osfs
//!
//! Settings come from built-in defaults, an optional `osfs.toml`, then
//! `OSFS_*` environment variables, later sources winning.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::vfs::single_root::DEFAULT_ROOT;

/// Config file looked up by `load`, extension optional
pub const DEFAULT_CONFIG_FILE: &str = "osfs";

/// Prefix for environment overrides, e.g. `OSFS_ROOT`
pub const ENV_PREFIX: &str = "OSFS";

/// Filesystem configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OsFsConfig {
    /// Host directory the single-root filesystem serves as `.`
    /// Environment: OSFS_ROOT
    pub root: String,
}

impl Default for OsFsConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
        }
    }
}

impl OsFsConfig {
    /// Load from `osfs.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from the given config file (if present) with environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("root", DEFAULT_ROOT)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: OsFsConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.root.is_empty() {
            return Err(ConfigError::Message("root cannot be empty".into()));
        }

        if !Path::new(&self.root).has_root() {
            return Err(ConfigError::Message(format!(
                "root must be an absolute path, got {:?}",
                self.root
            )));
        }

        Ok(())
    }

    /// Get root as PathBuf
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }
}
