use std::ops::RangeInclusive;

use tempfile::TempDir;

use crate::Durability;
use crate::LogEntry;
use crate::LogStore;
use crate::SledStore;
use crate::StoreConfig;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
    println!("setup logger for unit test.");
}

/// Opens a store in a fresh temporary directory. Keep the `TempDir` alive for
/// as long as the store is used.
pub fn setup_store(durability: Durability) -> (SledStore, TempDir) {
    let tempdir = tempfile::tempdir().unwrap();
    let store = SledStore::open(tempdir.path().join("raft"), durability).unwrap();
    (store, tempdir)
}

pub fn setup_store_with(config: impl FnOnce(&mut StoreConfig)) -> (SledStore, TempDir) {
    let tempdir = tempfile::tempdir().unwrap();
    let mut store_config = StoreConfig::with_path(tempdir.path().join("raft"), Durability::Medium);
    config(&mut store_config);
    let store = SledStore::with_config(store_config).unwrap();
    (store, tempdir)
}

/// Command entries whose term equals their index and whose payload is
/// `log{index}`
pub fn create_entries(range: RangeInclusive<u64>) -> Vec<LogEntry> {
    range
        .map(|i| LogEntry::command(i, i, format!("log{i}").into_bytes()))
        .collect()
}

pub fn store_entries(
    store: &impl LogStore,
    range: RangeInclusive<u64>,
) -> Vec<LogEntry> {
    let entries = create_entries(range);
    if let Err(e) = store.store_logs(&entries) {
        panic!("error: {:?}", e);
    }
    entries
}
