//! History behavior over the file-backed storage port.

use std::fs;

use sitesearch::{FileStorage, HistoryStore, MAX_HISTORY};
use tempfile::TempDir;

fn store_at(dir: &TempDir) -> HistoryStore {
    HistoryStore::new(Box::new(FileStorage::new(dir.path().join("storage.json"))))
}

#[test]
fn history_survives_store_reconstruction() {
    let dir = TempDir::new().unwrap();
    {
        let store = store_at(&dir);
        store.record_at("nexus dx1", Some(4), 1000);
        store.record_at("casa system", Some(7), 2000);
    }

    // a fresh store over the same file sees the same history
    let store = store_at(&dir);
    let items = store.list();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].query, "casa system");
    assert_eq!(items[0].result_count, Some(7));
    assert_eq!(items[1].query, "nexus dx1");
}

#[test]
fn cap_and_dedup_hold_across_instances() {
    let dir = TempDir::new().unwrap();
    for i in 0..30u64 {
        // every write through a brand-new store instance
        let store = store_at(&dir);
        store.record_at(&format!("query {}", i % 25), None, i);
    }

    let items = store_at(&dir).list();
    assert!(items.len() <= MAX_HISTORY);
    let mut lowered: Vec<String> = items.iter().map(|i| i.query.to_lowercase()).collect();
    lowered.sort();
    lowered.dedup();
    assert_eq!(lowered.len(), items.len());
}

#[test]
fn corrupt_file_reads_as_empty_history() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("storage.json"), "<<definitely not json>>").unwrap();

    let store = store_at(&dir);
    assert!(store.list().is_empty());
    store.record_at("recovers", None, 5);
    assert_eq!(store.list().len(), 1);
}

#[test]
fn unwritable_path_degrades_to_noop() {
    // a path whose parent cannot be created
    let store = HistoryStore::new(Box::new(FileStorage::new(
        "/dev/null/not-a-dir/storage.json",
    )));
    store.record("query", Some(1));
    store.remove("query");
    store.clear();
    assert!(store.list().is_empty());
}
