//! Todo items and their status.

use serde::{Deserialize, Serialize};

// =============================================================================
// ItemStatus
// =============================================================================

/// Item progress state. Serializes to the wire contract's screaming
/// variants: `INCOMPLETE`, `INPROGRESS`, `COMPLETE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "INCOMPLETE")]
    Incomplete,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETE")]
    Complete,
}

impl ItemStatus {
    /// Parse a wire-format status string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INCOMPLETE" => Some(Self::Incomplete),
            "INPROGRESS" => Some(Self::InProgress),
            "COMPLETE" => Some(Self::Complete),
            _ => None,
        }
    }

    /// The wire-format string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "INCOMPLETE",
            Self::InProgress => "INPROGRESS",
            Self::Complete => "COMPLETE",
        }
    }
}

// =============================================================================
// TodoItem
// =============================================================================

/// One item on a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub status: ItemStatus,
}

impl TodoItem {
    /// Create an incomplete item.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            status: ItemStatus::Incomplete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == ItemStatus::Complete
    }

    /// Flip completion: a complete item becomes incomplete, anything else
    /// becomes complete (in-progress counts as not done).
    pub fn toggle(&mut self) {
        self.status = if self.is_complete() {
            ItemStatus::Incomplete
        } else {
            ItemStatus::Complete
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(ItemStatus::InProgress.as_str(), "INPROGRESS");
        assert_eq!(ItemStatus::parse("COMPLETE"), Some(ItemStatus::Complete));
        assert_eq!(ItemStatus::parse("DONE"), None);
    }

    #[test]
    fn test_status_serde_round() {
        let json = serde_json::to_string(&ItemStatus::Incomplete).unwrap();
        assert_eq!(json, "\"INCOMPLETE\"");
        let back: ItemStatus = serde_json::from_str("\"INPROGRESS\"").unwrap();
        assert_eq!(back, ItemStatus::InProgress);
    }

    #[test]
    fn test_toggle() {
        let mut item = TodoItem::new(1, "laundry");
        assert!(!item.is_complete());

        item.toggle();
        assert!(item.is_complete());

        item.toggle();
        assert_eq!(item.status, ItemStatus::Incomplete);

        item.status = ItemStatus::InProgress;
        item.toggle();
        assert!(item.is_complete());
    }

    #[test]
    fn test_item_serializes_flat() {
        let item = TodoItem::new(2, "eggs");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 2, "text": "eggs", "status": "INCOMPLETE"})
        );
    }
}
