//! Todo domain model.
//!
//! Items, lists, and the in-memory store the REST collaborator serves.

mod item;
mod list;
mod store;

pub use item::{ItemStatus, TodoItem};
pub use list::TodoList;
pub use store::Store;
