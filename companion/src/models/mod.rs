mod catalog;
mod database;
pub mod event;
mod id;
mod interest;
pub mod listener;
pub mod profile;
mod skill;
mod store;
mod user;

pub use self::catalog::Catalog;
pub use self::database::{Database, FileStore, KeyValueStore, MemoryStore, STORAGE_KEY};
pub use self::event::{Event, EventBuilder};
pub use self::id::EventId;
pub use self::interest::Interest;
pub use self::skill::{Skill, SkillLevel};
pub use self::store::{AttendedResult, InterestDraft, InterestStatus, StateStore};
pub use self::user::UserState;
