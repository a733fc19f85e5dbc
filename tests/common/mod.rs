use std::path::Path;
use std::path::PathBuf;

use raft_sled_store::Durability;
use raft_sled_store::LogEntry;
use raft_sled_store::LogStore;
use raft_sled_store::SledStore;
use tempfile::TempDir;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
    println!("setup logger for integration test.");
}

/// A temp dir plus the database path inside it
pub fn temp_db_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raft");
    (dir, path)
}

pub fn open_store(
    path: &Path,
    durability: Durability,
) -> SledStore {
    match SledStore::open(path, durability) {
        Ok(store) => store,
        Err(e) => panic!("failed to open store at {path:?}: {e:?}"),
    }
}

pub fn append_commands(
    store: &dyn LogStore,
    first: u64,
    last: u64,
    term: u64,
) {
    let entries: Vec<LogEntry> = (first..=last)
        .map(|i| LogEntry::command(i, term, format!("log{i}").into_bytes()))
        .collect();
    store.store_logs(&entries).unwrap();
}
