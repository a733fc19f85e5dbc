//! Configuration management for the sled-backed raft store.
//!
//! Provides hierarchical configuration loading and validation with:
//! - Default values as code base
//! - Environment variable overrides
//! - Configuration file support
mod engine;
pub use engine::*;


use std::env;
use std::path::PathBuf;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_LOG_PREFIX;
use crate::constants::DEFAULT_META_PREFIX;
use crate::constants::DEFAULT_TREE_NAME;
use crate::Durability;
use crate::Error;
use crate::KeyEncoding;
use crate::KeySpace;
use crate::Result;

/// Main configuration container of a store
///
/// Combines all settings with hierarchical override support:
/// 1. Default values from code implementation
/// 2. Configuration file specified by `CONFIG_PATH`
/// 3. Environment variables with the `RAFT__` prefix (highest priority)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoreConfig {
    /// Database location. sled keeps its files in this directory.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Sync strength for committed writes
    #[serde(default)]
    pub durability: Durability,

    /// Base name of the sled tree holding logs and metadata
    #[serde(default = "default_tree_name")]
    pub tree_name: String,

    /// Namespace prefix of log entry keys
    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,

    /// Namespace prefix of stable-store keys
    #[serde(default = "default_meta_prefix")]
    pub meta_prefix: String,

    /// Encoding of the index suffix of log keys. Fixed once the database exists.
    #[serde(default)]
    pub key_encoding: KeyEncoding,

    /// Tuning knobs passed through to sled
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            durability: Durability::default(),
            tree_name: default_tree_name(),
            log_prefix: default_log_prefix(),
            meta_prefix: default_meta_prefix(),
            key_encoding: KeyEncoding::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Defaults for a store at `path`
    pub fn with_path(
        path: impl Into<PathBuf>,
        durability: Durability,
    ) -> Self {
        Self {
            path: path.into(),
            durability,
            ..Default::default()
        }
    }

    /// Loads configuration from hierarchical sources without validation.
    ///
    /// # Note
    /// Callers MUST call `validate()` before opening a store with the result.
    ///
    /// # Examples
    /// ```ignore
    /// std::env::set_var("RAFT__DURABILITY", "high");
    /// let cfg = StoreConfig::new()?.validate()?;
    /// ```
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("RAFT")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Applies additional configuration overrides from file without validation.
    ///
    /// Merging order (later sources override earlier):
    /// 1. Current configuration values
    /// 2. New configuration file
    /// 3. Latest environment variables (highest priority)
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("RAFT")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Validates configuration and returns validated instance.
    pub fn validate(self) -> Result<Self> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("store path cannot be empty".to_string()));
        }
        if self.tree_name.is_empty() {
            return Err(Error::InvalidConfig("tree_name cannot be empty".to_string()));
        }
        // '#' separates the base name from the compaction generation
        if self.tree_name.contains('#') {
            return Err(Error::InvalidConfig(format!(
                "tree_name {:?} must not contain '#'",
                self.tree_name
            )));
        }
        self.key_space()?;
        self.engine.validate()?;
        Ok(self)
    }

    pub fn key_space(&self) -> Result<KeySpace> {
        KeySpace::new(
            self.log_prefix.as_bytes(),
            self.meta_prefix.as_bytes(),
            self.key_encoding,
        )
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./db/raft")
}
fn default_tree_name() -> String {
    DEFAULT_TREE_NAME.to_string()
}
fn default_log_prefix() -> String {
    DEFAULT_LOG_PREFIX.to_string()
}
fn default_meta_prefix() -> String {
    DEFAULT_META_PREFIX.to_string()
}
