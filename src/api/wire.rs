//! Wire contract - request and response body types.
//!
//! Request bodies deserialize leniently (missing fields default to empty)
//! so the router can answer 400 with a field-specific message instead of a
//! serde error. Responses reuse the domain types directly: `TodoList` and
//! `TodoItem` already serialize to the contract shapes.

use serde::{Deserialize, Serialize};

/// `GET /lists` element: id and name only, no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: usize,
    pub name: String,
}

/// `POST /lists` body.
#[derive(Debug, Default, Deserialize)]
pub struct NewList {
    #[serde(default)]
    pub name: String,
}

/// `POST /lists/:id/items` body.
#[derive(Debug, Default, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub text: String,
}

/// `POST /lists/:id/items/:itemId` body. `status` stays a raw string here
/// so an unknown value becomes a validation error, not a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let body: NewList = serde_json::from_value(json!({})).unwrap();
        assert!(body.name.is_empty());

        let body: UpdateItem = serde_json::from_value(json!({"text": "x"})).unwrap();
        assert_eq!(body.text, "x");
        assert!(body.status.is_none());
    }

    #[test]
    fn test_unknown_status_still_deserializes() {
        let body: UpdateItem =
            serde_json::from_value(json!({"text": "x", "status": "DONE"})).unwrap();
        assert_eq!(body.status.as_deref(), Some("DONE"));
    }
}
