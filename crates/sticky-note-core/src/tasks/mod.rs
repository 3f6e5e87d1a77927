//! The task model.
//!
//! A note holds a single ordered list of tasks. Display order is insertion
//! order and only changes when tasks are deleted.

pub mod errors;
pub mod list;
pub mod types;

pub use errors::TaskError;
pub use list::TaskList;
pub use types::{Task, TaskId};
