//! API error taxonomy.
//!
//! Three failure classes, one status code each, and a flat
//! `{"error": message}` body for all of them.

use http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Everything the router can answer with besides success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Bad input: missing or malformed fields. 400.
    #[error("{0}")]
    Validation(String),

    /// The addressed list or item does not exist. 404.
    #[error("Requested item not found")]
    NotFound,

    /// The request was well-formed but the update could not be applied. 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The wire body for this error.
    pub fn body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
