use std::sync::Arc;

use raft_sled_store::Durability;
use raft_sled_store::Error;
use raft_sled_store::KeyEncoding;
use raft_sled_store::LogStore;
use raft_sled_store::SledStore;
use raft_sled_store::StableStore;
use raft_sled_store::StoreConfig;

use crate::common::append_commands;
use crate::common::enable_logger;
use crate::common::open_store;
use crate::common::temp_db_path;

#[test]
fn test_open_creates_database() {
    enable_logger();
    let (_dir, path) = temp_db_path();

    let store = open_store(&path, Durability::High);
    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.durability(), Durability::High);
    assert!(path.exists());

    store.close().unwrap();
}

#[test]
fn test_logs_and_metadata_survive_reopen() {
    let (_dir, path) = temp_db_path();

    let store = open_store(&path, Durability::High);
    append_commands(&store, 1, 5, 2);
    store.set_u64(b"CurrentTerm", 2).unwrap();
    store.set(b"LastVoteCand", b"node-3").unwrap();
    store
        .set_peers(&["1".to_string(), "2".to_string(), "3".to_string()])
        .unwrap();
    store.close().unwrap();

    let store = open_store(&path, Durability::Low);
    assert_eq!(store.first_index().unwrap(), 1);
    assert_eq!(store.last_index().unwrap(), 5);
    assert_eq!(store.get_log(4).unwrap().term, 2);
    assert_eq!(store.get_u64(b"CurrentTerm").unwrap(), 2);
    assert_eq!(store.get(b"LastVoteCand").unwrap(), b"node-3".to_vec());
    assert_eq!(store.peers().unwrap(), vec!["1", "2", "3"]);
    store.close().unwrap();
}

#[test]
fn test_second_open_of_same_path_fails() {
    let (_dir, path) = temp_db_path();
    let store = open_store(&path, Durability::Medium);

    assert!(matches!(
        SledStore::open(&path, Durability::Medium),
        Err(Error::Engine(_))
    ));

    store.close().unwrap();
    // The lock is released on close
    open_store(&path, Durability::Medium).close().unwrap();
}

#[test]
fn test_key_encoding_is_fixed_at_creation() {
    let (_dir, path) = temp_db_path();
    let decimal = StoreConfig {
        key_encoding: KeyEncoding::Decimal,
        ..StoreConfig::with_path(&path, Durability::Medium)
    };

    let store = SledStore::with_config(decimal.clone()).unwrap();
    append_commands(&store, 1, 3, 1);
    store.close().unwrap();

    let result = SledStore::with_config(StoreConfig::with_path(&path, Durability::Medium));
    assert!(matches!(
        result,
        Err(Error::KeyEncodingMismatch {
            stored: "decimal",
            configured: "big_endian"
        })
    ));

    let store = SledStore::with_config(decimal).unwrap();
    assert_eq!(store.last_index().unwrap(), 3);
    store.close().unwrap();
}

#[test]
fn test_invalid_config_is_rejected_before_open() {
    let (_dir, path) = temp_db_path();
    let config = StoreConfig {
        log_prefix: "x".to_string(),
        meta_prefix: "x".to_string(),
        ..StoreConfig::with_path(&path, Durability::Medium)
    };

    assert!(matches!(SledStore::with_config(config), Err(Error::InvalidConfig(_))));
    assert!(!path.exists());
}

#[test]
fn test_store_is_usable_as_trait_objects() {
    let (_dir, path) = temp_db_path();
    let store = Arc::new(open_store(&path, Durability::Medium));
    let logs: Arc<dyn LogStore> = store.clone();
    let stable: Arc<dyn StableStore> = store.clone();

    append_commands(logs.as_ref(), 1, 2, 1);
    stable.set_u64(b"CurrentTerm", 1).unwrap();

    assert_eq!(logs.last_index().unwrap(), 2);
    assert_eq!(stable.get_u64(b"CurrentTerm").unwrap(), 1);
    assert!(logs.get_log(3).unwrap_err().is_not_found());
    assert!(stable.get(b"missing").unwrap_err().is_not_found());
}
