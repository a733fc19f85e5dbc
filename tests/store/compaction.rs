use raft_sled_store::Durability;
use raft_sled_store::LogStore;
use raft_sled_store::StableStore;

use crate::common::append_commands;
use crate::common::enable_logger;
use crate::common::open_store;
use crate::common::temp_db_path;

#[test]
fn test_compaction_survives_reopen() {
    enable_logger();
    let (_dir, path) = temp_db_path();

    let mut store = open_store(&path, Durability::Medium);
    append_commands(&store, 1, 500, 1);
    store.delete_range(1, 400).unwrap();
    store.set(b"LastVoteCand", b"2").unwrap();
    store.compact_now().unwrap();
    store.compact_now().unwrap();
    append_commands(&store, 501, 510, 2);
    store.close().unwrap();

    let store = open_store(&path, Durability::Medium);
    assert_eq!(store.first_index().unwrap(), 401);
    assert_eq!(store.last_index().unwrap(), 510);
    assert_eq!(store.get_log(505).unwrap().term, 2);
    assert_eq!(store.get(b"LastVoteCand").unwrap(), b"2".to_vec());
    store.close().unwrap();
}

#[test]
fn test_compaction_of_empty_store() {
    let (_dir, path) = temp_db_path();
    let mut store = open_store(&path, Durability::High);

    store.compact_now().unwrap();

    assert_eq!(store.first_index().unwrap(), 0);
    assert_eq!(store.last_index().unwrap(), 0);
    append_commands(&store, 1, 1, 1);
    assert_eq!(store.last_index().unwrap(), 1);
    store.close().unwrap();
}
