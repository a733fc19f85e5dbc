use raft_sled_store::Durability;
use raft_sled_store::LogStore;
use raft_sled_store::StableStore;

use crate::common::append_commands;
use crate::common::open_store;
use crate::common::temp_db_path;

#[test]
fn test_every_level_persists_after_close() {
    for durability in [Durability::Low, Durability::Medium, Durability::High] {
        let (_dir, path) = temp_db_path();

        let store = open_store(&path, durability);
        append_commands(&store, 1, 100, 1);
        store.delete_range(1, 10).unwrap();
        store.set_u64(b"CurrentTerm", 7).unwrap();
        store.close().unwrap();

        let store = open_store(&path, durability);
        assert_eq!(store.first_index().unwrap(), 11, "{durability:?}");
        assert_eq!(store.last_index().unwrap(), 100, "{durability:?}");
        assert_eq!(store.get_u64(b"CurrentTerm").unwrap(), 7, "{durability:?}");
        store.close().unwrap();
    }
}

#[test]
fn test_explicit_sync_with_low_durability() {
    let (_dir, path) = temp_db_path();
    let store = open_store(&path, Durability::Low);
    append_commands(&store, 1, 3, 1);
    store.sync().unwrap();
    assert_eq!(store.last_index().unwrap(), 3);
    store.close().unwrap();
}

#[test]
fn test_drop_without_close_still_persists() {
    let (_dir, path) = temp_db_path();
    {
        let store = open_store(&path, Durability::Low);
        append_commands(&store, 1, 3, 1);
    }

    let store = open_store(&path, Durability::Low);
    assert_eq!(store.last_index().unwrap(), 3);
}
