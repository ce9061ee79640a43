//! Companion keeps track of the campus events a student cares about and turns
//! the events they attend into a skill profile and a list of resume bullets.
//!
//! All of its state is a single [`UserState`] blob stored under one fixed key
//! of a local key-value store, so it survives between runs without any server.
//!
//! [`Catalog`] is the fixed set of interests, events and skills. It never
//! changes at runtime, [`Catalog::campus`] gives you the stock one.
//!
//! [`Database`] is the persistence adapter. It reads and writes the state blob
//! through any [`KeyValueStore`]; [`FileStore`] keeps it in a `.ron` file and
//! [`MemoryStore`] keeps it in memory. A missing or corrupt blob is never an
//! error, you simply get an empty state back.
//!
//! [`StateStore`] owns the state for the session, applies the user's intents
//! (saving interests, marking an event as attended) and writes every change
//! through to the [`Database`].
//!
//! The [`profile`] module derives everything a view needs from the state:
//! the visible events, the skill profile and the resume bullets.
//!
//! [`StateListener`] watches a [`FileStore`] and sends the reloaded state
//! through a tokio channel whenever someone else rewrites it.
//!
//! To see it in action you can look at `examples/basic_usage.rs` to get a quick grasp on how to get running.
//!
//! [`UserState`]: crate::models::UserState
//! [`Catalog`]: crate::models::Catalog
//! [`Catalog::campus`]: crate::models::Catalog::campus
//! [`Database`]: crate::models::Database
//! [`KeyValueStore`]: crate::models::KeyValueStore
//! [`FileStore`]: crate::models::FileStore
//! [`MemoryStore`]: crate::models::MemoryStore
//! [`StateStore`]: crate::models::StateStore
//! [`profile`]: crate::models::profile
//! [`StateListener`]: crate::models::listener::StateListener

/// Errors returned by storage and state operations.
pub mod error;
/// This module holds the structure of companion.
pub mod models;

pub use error::{CatalogError, ParseNameError, SelectionError, StorageError};
