// Rust guideline compliant 2026-10-16

//! Contract tests shared by both record stores.
//!
//! Every check runs against `MemoryStore` and against a `JsonlStore` in a
//! temp directory.

use parcel_core::{Error, JsonlStore, MemoryStore, Parcel, ParcelStore, Status};
use std::fs;
use tempfile::TempDir;

/// Runs `check` against a fresh instance of every store implementation.
fn for_each_store(check: impl Fn(&dyn ParcelStore)) {
    check(&MemoryStore::new());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonlStore::new(temp_dir.path().join("parcels.jsonl"))
        .expect("Failed to create store");
    check(&store);
}

fn parcel(client: i64, address: &str) -> Parcel {
    Parcel::new(client, address.to_string())
}

#[test]
fn test_add_assigns_increasing_numbers() {
    for_each_store(|store| {
        let first = store.add(&parcel(1, "Addr A")).expect("add");
        let second = store.add(&parcel(2, "Addr B")).expect("add");
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    });
}

#[test]
fn test_add_ignores_input_number_and_keeps_fields() {
    for_each_store(|store| {
        let mut input = parcel(5, "Addr A");
        input.number = 99;
        input.status = Status::Sent;

        let number = store.add(&input).expect("add");
        let stored = store.get(number).expect("get");

        assert_eq!(number, 1);
        assert_eq!(stored.client, 5);
        assert_eq!(stored.status, Status::Sent);
        assert_eq!(stored.address, "Addr A");
        assert_eq!(stored.created_at, input.created_at);
    });
}

#[test]
fn test_add_rejects_blank_address() {
    for_each_store(|store| {
        let result = store.add(&parcel(1, ""));
        assert!(matches!(result, Err(Error::InvalidParcel(_))));
        assert!(store.get_by_client(1).expect("list").is_empty());
    });
}

#[test]
fn test_get_missing_is_not_found() {
    for_each_store(|store| {
        assert!(matches!(store.get(42), Err(Error::NotFound(42))));
    });
}

#[test]
fn test_get_by_client_filters_and_orders() {
    for_each_store(|store| {
        store.add(&parcel(2, "Other")).expect("add");
        let a = store.add(&parcel(1, "Addr A")).expect("add");
        store.add(&parcel(3, "Other")).expect("add");
        let b = store.add(&parcel(1, "Addr B")).expect("add");

        let owned = store.get_by_client(1).expect("list");
        let numbers: Vec<_> = owned.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![a, b]);

        assert!(store.get_by_client(404).expect("list").is_empty());
    });
}

#[test]
fn test_set_status_overwrites_and_ignores_missing() {
    for_each_store(|store| {
        let number = store.add(&parcel(1, "Addr")).expect("add");

        store.set_status(number, Status::Delivered).expect("set");
        assert_eq!(store.get(number).expect("get").status, Status::Delivered);

        store.set_status(number, Status::Registered).expect("set");
        assert_eq!(store.get(number).expect("get").status, Status::Registered);

        store.set_status(999, Status::Sent).expect("missing is a no-op");
        assert!(matches!(store.get(999), Err(Error::NotFound(999))));
    });
}

#[test]
fn test_compare_and_set_status() {
    for_each_store(|store| {
        let number = store.add(&parcel(1, "Addr")).expect("add");

        let stale = store
            .compare_and_set_status(number, Status::Sent, Status::Delivered)
            .expect("cas");
        assert!(!stale);
        assert_eq!(store.get(number).expect("get").status, Status::Registered);

        let applied = store
            .compare_and_set_status(number, Status::Registered, Status::Sent)
            .expect("cas");
        assert!(applied);
        assert_eq!(store.get(number).expect("get").status, Status::Sent);

        let missing = store
            .compare_and_set_status(999, Status::Registered, Status::Sent)
            .expect("cas");
        assert!(!missing);
    });
}

#[test]
fn test_set_address_only_while_registered() {
    for_each_store(|store| {
        let number = store.add(&parcel(1, "Addr A")).expect("add");

        assert!(store.set_address(number, "Addr B").expect("set"));
        assert_eq!(store.get(number).expect("get").address, "Addr B");

        for status in [Status::Sent, Status::Delivered] {
            store.set_status(number, status).expect("set status");
            assert!(!store.set_address(number, "Addr C").expect("blocked"));
            assert_eq!(store.get(number).expect("get").address, "Addr B");
        }

        assert!(!store.set_address(999, "Addr D").expect("missing"));
    });
}

#[test]
fn test_set_address_rejects_blank() {
    for_each_store(|store| {
        let number = store.add(&parcel(1, "Addr A")).expect("add");
        assert!(store.set_address(number, "  ").is_err());
        assert_eq!(store.get(number).expect("get").address, "Addr A");
    });
}

#[test]
fn test_delete_only_while_registered() {
    for_each_store(|store| {
        let kept = store.add(&parcel(1, "Addr A")).expect("add");
        let removed = store.add(&parcel(1, "Addr B")).expect("add");
        store.set_status(kept, Status::Sent).expect("set status");

        assert!(!store.delete(kept).expect("blocked"));
        assert!(store.delete(removed).expect("delete"));
        assert!(!store.delete(removed).expect("already gone"));
        assert!(!store.delete(999).expect("missing"));

        let owned = store.get_by_client(1).expect("list");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].number, kept);
    });
}

#[test]
fn test_numbers_not_reused_after_delete() {
    for_each_store(|store| {
        let first = store.add(&parcel(1, "Addr")).expect("add");
        assert!(store.delete(first).expect("delete"));
        let second = store.add(&parcel(1, "Addr")).expect("add");
        assert!(second > first);
    });
}

#[test]
fn test_jsonl_persists_across_instances() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("parcels.jsonl");

    let number = {
        let store = JsonlStore::new(path.clone()).expect("store");
        let number = store.add(&parcel(1, "Addr A")).expect("add");
        store.set_status(number, Status::Sent).expect("set status");
        number
    };

    let reopened = JsonlStore::new(path).expect("store");
    let stored = reopened.get(number).expect("get");
    assert_eq!(stored.status, Status::Sent);
    assert_eq!(stored.address, "Addr A");
}

#[test]
fn test_jsonl_sequence_survives_deleting_last_row() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("parcels.jsonl");

    let store = JsonlStore::new(path.clone()).expect("store");
    store.add(&parcel(1, "Addr")).expect("add");
    let last = store.add(&parcel(1, "Addr")).expect("add");
    assert!(store.delete(last).expect("delete"));

    let reopened = JsonlStore::new(path).expect("store");
    assert_eq!(reopened.add(&parcel(1, "Addr")).expect("add"), last + 1);
}

#[test]
fn test_jsonl_record_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("parcels.jsonl");
    let store = JsonlStore::new(path.clone()).expect("store");

    let mut input = parcel(7, "Addr A");
    input.created_at = "2026-10-16T09:30:00Z".to_string();
    store.add(&input).expect("add");

    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(
        content,
        "{\"number\":1,\"client\":7,\"status\":\"registered\",\"address\":\"Addr A\",\"created_at\":\"2026-10-16T09:30:00Z\"}\n"
    );
}

#[test]
fn test_jsonl_skips_malformed_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("parcels.jsonl");
    let content = r#"{"number":1,"client":1,"status":"sent","address":"A","created_at":"2026-10-16T09:30:00Z"}
not json at all

{"number":2,"client":1,"status":"registered","address":"B","created_at":"2026-10-16T09:31:00Z"}
"#;
    fs::write(&path, content).expect("write");

    let store = JsonlStore::new(path).expect("store");
    let parcels = store.load_all().expect("load");
    assert_eq!(parcels.len(), 2);
    assert_eq!(parcels[0].status, Status::Sent);
    assert_eq!(parcels[1].number, 2);
}

#[test]
fn test_jsonl_write_keeps_unreadable_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("parcels.jsonl");
    let content = r#"{"number":1,"client":1,"status":"lost","address":"A","created_at":"2026-10-16T09:30:00Z"}
{"number":2,"client":1,"status":"registered","address":"B","created_at":"2026-10-16T09:31:00Z"}
"#;
    fs::write(&path, content).expect("write");

    let store = JsonlStore::new(path.clone()).expect("store");
    assert_eq!(store.get(2).expect("get").address, "B");

    let err = store.set_address(2, "C").expect_err("unreadable line");
    assert!(err.is_storage());
    let err = store.add(&parcel(1, "D")).expect_err("unreadable line");
    assert!(err.is_storage());
    assert!(store.delete(2).expect_err("unreadable line").is_storage());

    assert_eq!(fs::read_to_string(&path).expect("read"), content);
}

#[test]
fn test_jsonl_corrupt_sequence_is_storage_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("parcels.jsonl");
    fs::write(temp_dir.path().join("parcels.seq"), "seven").expect("write");

    let store = JsonlStore::new(path).expect("store");
    let err = store.add(&parcel(1, "Addr")).expect_err("corrupt sequence");
    assert!(err.is_storage());
}

#[test]
fn test_jsonl_missing_directory_is_storage_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing").join("parcels.jsonl");

    let store = JsonlStore::new(path).expect("store");
    let err = store.add(&parcel(1, "Addr")).expect_err("no directory");
    assert!(err.is_storage());
}

#[test]
fn test_jsonl_empty_path_rejected() {
    assert!(JsonlStore::new(std::path::PathBuf::new()).is_err());
}
