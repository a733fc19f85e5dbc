mod sled_store;

pub use sled_store::*;


use tracing::debug;
use tracing::warn;

use crate::Error;
use crate::StoreConfig;

#[doc(hidden)]
pub fn init_sled_db(config: &StoreConfig) -> Result<sled::Db, Error> {
    debug!(
        "init_sled_db from path: {:?}, durability: {:?}",
        &config.path, config.durability
    );

    sled::Config::default()
        .path(&config.path)
        .cache_capacity(config.engine.cache_capacity)
        .flush_every_ms(config.durability.flush_every_ms(config.engine.flush_interval_ms))
        .use_compression(config.engine.use_compression)
        .mode(sled::Mode::HighThroughput)
        .open()
        .map_err(|e| {
            warn!(
                "Try to open DB at this location: {:?} and failed: {:?}",
                config.path, e
            );
            Error::Engine(e)
        })
}

/// Name of the data tree for a compaction generation
pub(crate) fn generation_tree_name(
    tree_name: &str,
    generation: u64,
) -> String {
    format!("{tree_name}#{generation}")
}

/// Key of a format marker in the sled default tree
pub(crate) fn marker_key(
    tree_name: &str,
    suffix: &str,
) -> String {
    format!("{tree_name}/{suffix}")
}
