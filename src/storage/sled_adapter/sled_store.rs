//! Raft log store and stable store on top of one sled tree.
//!
//! Log entries and metadata share a tree and are told apart by the key
//! prefixes of the store's [`KeySpace`]. Index order equals key order, so the
//! first and last index are a single seek at either end of the log prefix.

use std::path::Path;

use autometrics::autometrics;
use sled::Batch;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::instrument;
use tracing::trace;
use tracing::warn;

use super::generation_tree_name;
use super::init_sled_db;
use super::marker_key;
use crate::constants::COMPACTION_BATCH_SIZE;
use crate::constants::GENERATION_MARKER_SUFFIX;
use crate::constants::KEY_ENCODING_MARKER_SUFFIX;
use crate::convert::safe_kv;
use crate::convert::safe_vk;
use crate::decode_entry;
use crate::encode_entry;
use crate::Durability;
use crate::Error;
use crate::KeyEncoding;
use crate::KeySpace;
use crate::LogEntry;
use crate::LogStore;
use crate::Result;
use crate::StableStore;
use crate::StoreConfig;
use crate::API_SLO;

pub struct SledStore {
    pub(super) db: sled::Db,

    /// Live data tree, replaced by `compact_now`
    pub(super) tree: sled::Tree,

    pub(super) generation: u64,

    key_space: KeySpace,

    config: StoreConfig,
}

impl std::fmt::Debug for SledStore {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SledStore")
            .field("path", &self.config.path)
            .field("generation", &self.generation)
            .field("tree_len", &self.tree.len())
            .finish()
    }
}

impl Drop for SledStore {
    fn drop(&mut self) {
        match self.db.flush() {
            Ok(_) => debug!("Successfully flush SledStore"),
            Err(e) => error!(?e, "Failed to flush SledStore"),
        }
    }
}

impl SledStore {
    /// Opens (or creates) a store at `path` with default settings.
    pub fn open(
        path: impl AsRef<Path>,
        durability: Durability,
    ) -> Result<Self> {
        Self::with_config(StoreConfig::with_path(path.as_ref(), durability))
    }

    /// Opens (or creates) a store described by `config`.
    ///
    /// Fails with [`Error::KeyEncodingMismatch`] when the database was
    /// created with a different `key_encoding`.
    #[instrument(skip(config), fields(path = ?config.path))]
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let config = config.validate()?;
        let key_space = config.key_space()?;

        // Dropping `db` on any early return releases the file lock.
        let db = init_sled_db(&config)?;
        check_key_encoding(&db, &config.tree_name, key_space.encoding())?;

        let generation = match db.get(marker_key(&config.tree_name, GENERATION_MARKER_SUFFIX))? {
            Some(raw) => safe_vk(&raw)?,
            None => 0,
        };
        drop_stale_generations(&db, &config.tree_name, generation)?;
        let tree = db.open_tree(generation_tree_name(&config.tree_name, generation))?;

        info!(
            "opened raft store at {:?} (durability: {:?}, encoding: {}, generation: {})",
            config.path,
            config.durability,
            key_space.encoding().as_str(),
            generation
        );

        Ok(Self {
            db,
            tree,
            generation,
            key_space,
            config,
        })
    }

    /// Flushes outstanding writes and releases the database.
    pub fn close(self) -> Result<()> {
        let flushed = self.db.flush()?;
        debug!("closing raft store at {:?}, {} bytes flushed", self.config.path, flushed);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn durability(&self) -> Durability {
        self.config.durability
    }

    pub fn key_space(&self) -> &KeySpace {
        &self.key_space
    }

    /// Forces a sync of every pending write, whatever the durability level.
    pub fn sync(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Visits entries with `index >= pivot` in ascending order until `visit`
    /// returns `false` or the log ends.
    pub fn ascend_logs<F>(
        &self,
        pivot: u64,
        mut visit: F,
    ) -> Result<()>
    where
        F: FnMut(LogEntry) -> bool,
    {
        let prefix = self.key_space.log_prefix();
        for item in self.tree.range(self.key_space.log_key(pivot)..) {
            let (key, value) = item?;
            if !key.starts_with(prefix) {
                break;
            }
            if !visit(decode_entry(&value)?) {
                break;
            }
        }
        Ok(())
    }

    /// Rewrites every live record into a fresh tree and drops the old one,
    /// releasing the space held by deleted and overwritten records.
    ///
    /// The switch is a single marker write, so a crash leaves either the old
    /// or the new tree in charge; leftovers are dropped on the next open.
    #[instrument(skip(self))]
    pub fn compact_now(&mut self) -> Result<()> {
        let next_generation = self.generation + 1;
        let next_name = generation_tree_name(&self.config.tree_name, next_generation);
        let next = self.db.open_tree(&next_name)?;
        next.clear()?;

        let mut batch = Batch::default();
        let mut pending = 0;
        let mut copied = 0u64;
        for item in self.tree.iter() {
            let (key, value) = item?;
            batch.insert(key, value);
            pending += 1;
            if pending == COMPACTION_BATCH_SIZE {
                next.apply_batch(std::mem::take(&mut batch))?;
                copied += pending as u64;
                pending = 0;
            }
        }
        if pending > 0 {
            next.apply_batch(batch)?;
            copied += pending as u64;
        }
        next.flush()?;

        self.db.insert(
            marker_key(&self.config.tree_name, GENERATION_MARKER_SUFFIX),
            &safe_kv(next_generation)[..],
        )?;
        self.db.flush()?;

        let old_name = generation_tree_name(&self.config.tree_name, self.generation);
        self.tree = next;
        self.generation = next_generation;
        if !self.db.drop_tree(&old_name)? {
            warn!("compaction: tree {} was already gone", old_name);
        }
        self.db.flush()?;

        info!(
            "compaction done: {} records moved to {}, {:?} bytes on disk",
            copied,
            next_name,
            self.db.size_on_disk().ok()
        );
        Ok(())
    }

    /// Honours `Durability::High` once a mutation is applied.
    fn commit(&self) -> Result<()> {
        if self.config.durability.sync_on_commit() {
            self.db.flush()?;
        }
        Ok(())
    }

    fn index_at(
        &self,
        item: Option<sled::Result<(sled::IVec, sled::IVec)>>,
    ) -> Result<u64> {
        match item {
            Some(item) => {
                let (key, _) = item?;
                self.key_space.index_from_log_key(&key)
            }
            None => Ok(0),
        }
    }
}

impl LogStore for SledStore {
    #[autometrics(objective = API_SLO)]
    fn first_index(&self) -> Result<u64> {
        self.index_at(self.tree.scan_prefix(self.key_space.log_prefix()).next())
    }

    #[autometrics(objective = API_SLO)]
    fn last_index(&self) -> Result<u64> {
        self.index_at(self.tree.scan_prefix(self.key_space.log_prefix()).next_back())
    }

    #[autometrics(objective = API_SLO)]
    fn get_log(
        &self,
        index: u64,
    ) -> Result<LogEntry> {
        match self.tree.get(self.key_space.log_key(index))? {
            Some(raw) => decode_entry(&raw).inspect_err(|e| {
                error!("corrupt log entry at index {}: {}", index, e);
            }),
            None => Err(Error::LogNotFound(index)),
        }
    }

    #[autometrics(objective = API_SLO)]
    fn store_logs(
        &self,
        entries: &[LogEntry],
    ) -> Result<()> {
        trace!("store_logs len = {:?}", entries.len());
        if entries.is_empty() {
            return Ok(());
        }

        let mut batch = Batch::default();
        for entry in entries {
            batch.insert(self.key_space.log_key(entry.index), &encode_entry(entry)[..]);
        }

        self.tree.apply_batch(batch)?;
        self.commit()
    }

    #[autometrics(objective = API_SLO)]
    fn delete_range(
        &self,
        min: u64,
        max: u64,
    ) -> Result<()> {
        trace!("delete_range [{}, {}]", min, max);
        if min > max {
            return Ok(());
        }

        // Only keys that exist are visited, so absent indices cost nothing.
        let start = self.key_space.log_key(min);
        let end = self.key_space.log_key(max);
        let mut batch = Batch::default();
        let mut removed = 0usize;
        for item in self.tree.range(start..=end) {
            let (key, _) = item?;
            batch.remove(key);
            removed += 1;
        }

        if removed == 0 {
            return Ok(());
        }
        self.tree.apply_batch(batch)?;
        debug!("delete_range [{}, {}] removed {} entries", min, max, removed);
        self.commit()
    }
}

impl StableStore for SledStore {
    fn set(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        self.tree.insert(self.key_space.meta_key(key), value)?;
        self.commit()
    }

    fn get(
        &self,
        key: &[u8],
    ) -> Result<Vec<u8>> {
        match self.tree.get(self.key_space.meta_key(key))? {
            Some(ivec) => Ok(ivec.to_vec()),
            None => Err(Error::KeyNotFound),
        }
    }
}

/// Records the key encoding of a new database, or checks it against the
/// one recorded when the database was created.
fn check_key_encoding(
    db: &sled::Db,
    tree_name: &str,
    configured: KeyEncoding,
) -> Result<()> {
    let key = marker_key(tree_name, KEY_ENCODING_MARKER_SUFFIX);
    match db.get(&key)? {
        Some(raw) => {
            let stored = KeyEncoding::from_marker(&raw)?;
            if stored != configured {
                error!(
                    "database was created with {} keys, configured {}",
                    stored.as_str(),
                    configured.as_str()
                );
                return Err(Error::KeyEncodingMismatch {
                    stored: stored.as_str(),
                    configured: configured.as_str(),
                });
            }
        }
        None => {
            db.insert(&key, vec![configured.marker()])?;
            db.flush()?;
        }
    }
    Ok(())
}

/// Drops data trees of other generations left behind by an interrupted
/// compaction.
fn drop_stale_generations(
    db: &sled::Db,
    tree_name: &str,
    current: u64,
) -> Result<()> {
    let prefix = format!("{tree_name}#");
    for name in db.tree_names() {
        let Some(suffix) = name.strip_prefix(prefix.as_bytes()) else {
            continue;
        };
        let Ok(generation) = crate::convert::parse_u64(suffix) else {
            continue;
        };
        if generation != current {
            warn!("dropping stale tree generation {} of {}", generation, tree_name);
            db.drop_tree(&name)?;
        }
    }
    Ok(())
}
