use std::fs;

use companion::models::{
    AttendedResult, Catalog, Database, EventId, FileStore, Interest, KeyValueStore, StateStore,
    UserState, STORAGE_KEY,
};
use tempfile::TempDir;

#[test]
fn creates_db_directory() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    assert!(dir.path().join("db").is_dir());
    assert_eq!(store.dir(), dir.path().join("db"));
    assert_eq!(
        store.path_for(STORAGE_KEY),
        dir.path().join("db").join("college_event_companion_state.ron")
    );
}

#[test]
fn missing_key_reads_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    assert!(store.get("nothing").unwrap().is_none());
}

#[test]
fn shorter_value_replaces_longer_one() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path()).unwrap();
    store.set("k", "a fairly long first value").unwrap();
    store.set("k", "short").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
}

#[test]
fn state_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = StateStore::open(
        Database::new(FileStore::new(dir.path()).unwrap()),
        Catalog::campus(),
    );
    first.set_interests([Interest::Sports]).unwrap();
    assert_eq!(
        first.mark_attended(EventId(4)).unwrap(),
        AttendedResult::Recorded
    );
    let saved = first.state().clone();
    drop(first);

    let mut second = StateStore::open(
        Database::new(FileStore::new(dir.path()).unwrap()),
        Catalog::campus(),
    );
    assert_eq!(second.state(), &saved);
    assert_eq!(
        second.mark_attended(EventId(4)).unwrap(),
        AttendedResult::AlreadyAttended
    );
}

#[test]
fn corrupt_file_starts_empty_and_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    fs::write(store.path_for(STORAGE_KEY), "(selectedInterests: [\"Te").unwrap();

    let mut state_store = StateStore::open(Database::new(store.clone()), Catalog::campus());
    assert_eq!(state_store.state(), &UserState::default());

    state_store.mark_attended(EventId(1)).unwrap();
    let reopened = Database::new(store).load();
    assert_eq!(&reopened, state_store.state());
}

#[test]
fn unwritable_directory_reports_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    let mut db = Database::new(store.clone());
    fs::remove_dir_all(store.dir()).unwrap();
    assert!(db.save(&UserState::default()).is_err());
    assert_eq!(db.load(), UserState::default());
}
