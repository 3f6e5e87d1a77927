//! Intents, events and the store that applies them.
//!
//! The view never mutates tasks directly. It renders a snapshot from
//! [`TaskStore::tasks`] and sends [`Command`]s through [`Store::dispatch`];
//! the returned [`Event`]s say what changed.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::TaskStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
