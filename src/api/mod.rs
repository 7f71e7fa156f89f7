//! REST collaborator.
//!
//! The todo service the data-fetching side of an application talks to:
//! wire types, error taxonomy, and an in-process router over the store.

mod error;
mod router;
mod wire;

pub use error::ApiError;
pub use router::{ApiRequest, ApiResponse, Router};
pub use wire::{ListSummary, NewItem, NewList, UpdateItem};
