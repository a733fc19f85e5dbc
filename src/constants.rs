// -
// Database namespaces

/// Sled tree holding both the log and the stable-store namespaces
pub(crate) const DEFAULT_TREE_NAME: &str = "raft";

/// Key namespace prefixes inside the data tree
pub(crate) const DEFAULT_LOG_PREFIX: &str = "l:";
pub(crate) const DEFAULT_META_PREFIX: &str = "c:";

/// Format markers, stored in the sled default tree as `<tree_name>/<suffix>`
pub(crate) const KEY_ENCODING_MARKER_SUFFIX: &str = "key_encoding";
pub(crate) const GENERATION_MARKER_SUFFIX: &str = "generation";

/// Stable-store key carrying the serialized peer list
pub const PEERS_KEY: &[u8] = b"peers";

/// Size of the fixed entry header: index(8) + term(8) + type(1)
pub const ENTRY_HEADER_LEN: usize = 17;

/// Sync interval used by `Durability::Medium`
pub(crate) const DEFAULT_FLUSH_INTERVAL_MS: u64 = 1000;

pub(crate) const DEFAULT_CACHE_CAPACITY: u64 = 64 * 1024 * 1024; //64MB

/// Number of records copied per batch while compacting
pub(crate) const COMPACTION_BATCH_SIZE: usize = 1024;
