//! Todo lists.

use serde::{Deserialize, Serialize};

use super::item::{ItemStatus, TodoItem};

/// A named list of todo items.
///
/// Item ids are positional at creation time: the Nth item added gets id N
/// (1-based). Ids are not reassigned when the list changes, so they are
/// lookup keys, not indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: usize,
    pub name: String,
    pub items: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append a new incomplete item with the next positional id.
    pub fn add_item(&mut self, text: impl Into<String>) -> &TodoItem {
        let id = (self.items.len() + 1) as u32;
        self.items.push(TodoItem::new(id, text));
        self.items.last().expect("just pushed")
    }

    /// Replace the item with the given id. Returns the updated item, or
    /// `None` when no item has that id.
    pub fn update_item(&mut self, id: u32, text: impl Into<String>, status: ItemStatus) -> Option<TodoItem> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.text = text.into();
        item.status = status;
        Some(item.clone())
    }

    /// Find an item by id.
    pub fn item(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|i| i.id == id)
    }
}
