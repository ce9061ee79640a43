use super::UserState;
use crate::error::StorageError;
use file_lock::{FileLock, FileOptions};
use std::{
    collections::HashMap,
    fs::create_dir_all,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// The fixed key the user state is stored under.
pub const STORAGE_KEY: &str = "college_event_companion_state";

/// A local string key-value store, the medium the state blob lives in.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces whatever is stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keeps every key in its own `.ron` file inside `<base_path>/db`.
///
/// Writers hold an exclusive lock on the file and readers a shared one. The
/// locks are per process, so a reader in the writing process itself can
/// still see a truncated or half written blob.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}
impl FileStore {
    pub fn new<P>(base_path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let base_path = base_path.as_ref().join("db");
        create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }
    /// Directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.base_path
    }
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.ron"))
    }
}
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.is_file() {
            return Ok(None);
        }
        let options = FileOptions::new().read(true);
        let filelock = FileLock::lock(&path, true, options)?;
        let mut buf = BufReader::new(&filelock.file);
        let mut contents = String::new();
        buf.read_to_string(&mut contents)?;
        Ok(Some(contents))
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let options = FileOptions::new().write(true).create(true);
        let filelock = FileLock::lock(self.path_for(key), true, options)?;
        filelock.file.set_len(0)?;
        let mut buf = BufWriter::new(&filelock.file);
        buf.write_all(value.as_bytes())?;
        buf.flush()?;
        Ok(())
    }
}

/// An in-process store, optionally limited to a number of bytes across all
/// keys.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
    /// A store that rejects writes once the stored values would exceed
    /// `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }
    fn used_except(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity {
            if self.used_except(key) + value.len() > capacity {
                return Err(StorageError::QuotaExceeded {
                    needed: value.len(),
                    capacity,
                });
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Reads and writes the [`UserState`] blob under a single key.
#[derive(Debug, Clone)]
pub struct Database<S> {
    store: S,
    key: String,
}
impl<S> Database<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }
    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: String::from(key),
        }
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Loads the stored state.
    ///
    /// A missing blob gives an empty state. So does an unreadable or
    /// malformed one, which is logged and otherwise ignored.
    pub fn load(&self) -> UserState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!(key = %self.key, "no stored state, starting empty");
                UserState::default()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to load state, starting empty");
                UserState::default()
            }
        }
    }

    /// Like [`load`](Self::load) but reports what went wrong.
    pub fn try_load(&self) -> Result<Option<UserState>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let state = ron::from_str(&raw)?;
        debug!(key = %self.key, bytes = raw.len(), "loaded state");
        Ok(Some(state))
    }

    /// Serializes the whole state and replaces the stored blob.
    pub fn save(&mut self, state: &UserState) -> Result<(), StorageError> {
        let raw = ron::to_string(state)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, bytes = raw.len(), "saved state");
        Ok(())
    }
}
