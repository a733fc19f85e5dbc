use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::constants::DEFAULT_FLUSH_INTERVAL_MS;
use crate::Error;
use crate::Result;

/// Settings handed to `sled::Config` when the store is opened
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EngineConfig {
    /// Page cache size in bytes
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// zstd compression of stored pages
    #[serde(default = "default_use_compression")]
    pub use_compression: bool,

    /// Background sync period, only used with `Durability::Medium`
    #[serde(default = "default_flush_interval_ms")]
    pub flush_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            use_compression: default_use_compression(),
            flush_interval_ms: default_flush_interval_ms(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.flush_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "flush_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(Error::InvalidConfig("cache_capacity must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_CAPACITY
}
fn default_use_compression() -> bool {
    false
}
fn default_flush_interval_ms() -> u64 {
    DEFAULT_FLUSH_INTERVAL_MS
}
