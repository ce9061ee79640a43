use std::io;

use crate::models::EventId;

/// Failure to read from or write to the persistence medium.
///
/// Only writes surface this to callers. A failed read is absorbed by
/// [`Database::load`](crate::models::Database::load) and replaced with an
/// empty state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying file could not be opened, locked, read or written.
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The state could not be serialized.
    #[error("failed to encode state: {0}")]
    Encode(#[from] ron::Error),

    /// The stored blob is not a valid state.
    #[error("failed to decode state: {0}")]
    Decode(#[from] ron::error::SpannedError),

    /// The store refused the write because it would exceed its capacity.
    #[error("storage quota exceeded: {needed} bytes needed, {capacity} available")]
    QuotaExceeded {
        /// Size of the rejected value.
        needed: usize,
        /// Total capacity of the store.
        capacity: usize,
    },

    /// The storage watcher could not be set up.
    #[error("failed to watch storage: {0}")]
    Watch(#[from] notify::Error),
}

/// A selection of interests that could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The name is not one of the catalog's interests. The selection was
    /// rejected as a whole.
    #[error("unknown interest: {0:?}")]
    UnknownInterest(String),

    /// The selection was applied in memory but could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A catalog that breaks the catalog invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two events share the same id.
    #[error("duplicate event id: {0}")]
    DuplicateEventId(EventId),

    /// An event lists no skills.
    #[error("event {0} lists no skills")]
    NoSkills(EventId),
}

/// A name that is not part of a closed catalog set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} name: {name:?}")]
pub struct ParseNameError {
    /// What was being parsed (`"interest"` or `"skill"`).
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}
