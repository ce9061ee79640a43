use std::{
    ffi::OsString,
    io,
    sync::mpsc::{self as std_mpsc, RecvTimeoutError},
    time::Duration,
};

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{Database, FileStore, UserState};
use crate::error::StorageError;

/// Sends a freshly loaded [`UserState`] whenever the state file of a
/// [`FileStore`] is created or modified.
///
/// Only complete states are sent. A file that is empty or fails to parse is
/// skipped, since it is either mid-write or corrupt.
///
/// The receiving side is expected to hand the state to
/// [`StateStore::adopt`](super::StateStore::adopt) and re-render. Writes made
/// by the local store are reported too, they simply reload the same state.
#[non_exhaustive]
#[derive(Debug)]
pub struct StateListener {
    db: Database<FileStore>,
    sender: mpsc::Sender<UserState>,
    refresh_rate: u64,
}
impl StateListener {
    /// `refresh_rate` is how often, in milliseconds, the listener checks
    /// whether the receiver is gone while no change comes in.
    pub fn new(db: Database<FileStore>, sender: mpsc::Sender<UserState>, refresh_rate: u64) -> Self {
        Self {
            db,
            sender,
            refresh_rate,
        }
    }

    /// Runs until the receiver is dropped.
    ///
    /// The directory is watched rather than the file so a state file that
    /// does not exist yet is picked up once it is created.
    pub async fn start(self) -> Result<(), StorageError> {
        let Self {
            db,
            sender,
            refresh_rate,
        } = self;
        let file_name: OsString = db
            .store()
            .path_for(db.key())
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();

        let (tx, rx) = std_mpsc::channel();
        let mut watcher = RecommendedWatcher::new(tx, notify::Config::default())?;
        watcher.watch(db.store().dir(), RecursiveMode::NonRecursive)?;
        let tick = Duration::from_millis(refresh_rate);

        tokio::task::spawn_blocking(move || {
            let _watcher = watcher;
            loop {
                let fs_event = match rx.recv_timeout(tick) {
                    Ok(Ok(fs_event)) => fs_event,
                    Ok(Err(e)) => {
                        warn!(error = %e, "storage watcher error");
                        continue;
                    }
                    Err(RecvTimeoutError::Timeout) if sender.is_closed() => break,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                };
                let touches_state = fs_event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if !touches_state {
                    continue;
                }
                if !matches!(fs_event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                    continue;
                }
                // A write truncates before it fills the file, so an empty or
                // unreadable blob is a write in progress, not a new state.
                let state = match db.try_load() {
                    Ok(Some(state)) => state,
                    Ok(None) => {
                        debug!(key = %db.key(), "state file empty, skipping");
                        continue;
                    }
                    Err(e) => {
                        warn!(key = %db.key(), error = %e, "unreadable state on disk, skipping");
                        continue;
                    }
                };
                debug!(key = %db.key(), "state changed on disk, reloading");
                if sender.blocking_send(state).is_err() {
                    break;
                }
            }
        })
        .await
        .map_err(|e| StorageError::Io(io::Error::new(io::ErrorKind::Other, e)))
    }
}
