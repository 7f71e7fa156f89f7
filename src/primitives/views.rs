//! Composed todo views.
//!
//! The application-level components of the todo app, expressed as plain
//! functions from domain data to subtrees. They are rebuilt from scratch
//! on every render pass, like everything else.

use crate::node::Node;
use crate::todo::TodoItem;
use crate::types::Attr;

use super::block::block;
use super::control::{checkbox, input};
use super::text::text;
use super::types::{BlockProps, InputProps, TextProps};

/// One item row: completion marker plus the item text, struck through
/// once the item is done.
pub fn todo_item_row(item: &TodoItem) -> Node {
    let attrs = if item.is_complete() {
        Attr::STRIKETHROUGH | Attr::DIM
    } else {
        Attr::NONE
    };
    block(BlockProps {
        children: vec![
            checkbox(item.is_complete()),
            text(TextProps {
                content: item.text.clone(),
                attrs,
            }),
        ],
    })
}

/// The whole list: one row per item.
pub fn todo_list_view(items: &[TodoItem]) -> Node {
    block(BlockProps {
        children: items.iter().map(todo_item_row).collect(),
    })
}

/// The item-creator input with its stock placeholder.
pub fn item_creator() -> Node {
    input(InputProps::default())
}
