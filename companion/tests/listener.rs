use std::{fs, time::Duration};

use companion::models::{
    listener::StateListener, Catalog, Database, EventId, FileStore, StateStore, UserState,
    STORAGE_KEY,
};
use tempfile::TempDir;
use tokio::{
    sync::mpsc::{self, error::TryRecvError},
    time::timeout,
};

#[tokio::test]
async fn reports_changes_made_by_another_writer() {
    let dir = TempDir::new().unwrap();
    let files = FileStore::new(dir.path()).unwrap();

    let (tx, mut rx) = mpsc::channel(16);
    let listener = StateListener::new(Database::new(files.clone()), tx, 50);
    let handle = tokio::spawn(listener.start());
    // Give the watcher time to register before writing.
    tokio::time::sleep(Duration::from_millis(200)).await;

    let mut this_tab = StateStore::open(Database::new(files.clone()), Catalog::campus());
    assert_eq!(this_tab.state(), &UserState::default());

    let mut other_tab = StateStore::open(Database::new(files), Catalog::campus());
    other_tab.mark_attended(EventId(2)).unwrap();
    let expected = other_tab.state().clone();

    // A write can surface as several notifications; wait for the final state.
    let received = timeout(Duration::from_secs(5), async {
        while let Some(state) = rx.recv().await {
            if state == expected {
                return Some(state);
            }
        }
        None
    })
    .await
    .unwrap()
    .unwrap();

    this_tab.adopt(received);
    assert!(this_tab.is_attended(EventId(2)));

    drop(rx);
    timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn skips_empty_and_unreadable_files() {
    let dir = TempDir::new().unwrap();
    let files = FileStore::new(dir.path()).unwrap();
    let path = files.path_for(STORAGE_KEY);

    let (tx, mut rx) = mpsc::channel(16);
    let listener = StateListener::new(Database::new(files.clone()), tx, 50);
    let handle = tokio::spawn(listener.start());
    tokio::time::sleep(Duration::from_millis(200)).await;

    fs::write(&path, "").unwrap();
    fs::write(&path, "(selectedInterests: [\"Tech").unwrap();
    fs::write(&path, "not a state at all").unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);

    let mut writer = StateStore::open(Database::new(files), Catalog::campus());
    writer.mark_attended(EventId(6)).unwrap();
    let first = timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&first, writer.state());

    drop(rx);
    timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}
