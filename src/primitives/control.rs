//! Control primitives - checkbox marker and text-entry field.

use crate::node::{Node, NodeKind};
use crate::types::Attr;

use super::types::InputProps;

/// Create a checked/unchecked marker. Renders as `[x]` or `[ ]`.
pub fn checkbox(checked: bool) -> Node {
    Node {
        kind: NodeKind::Checkbox { checked },
        content: String::new(),
        attrs: Attr::NONE,
        children: Vec::new(),
    }
}

/// Create a text-entry field.
///
/// Presentational only: the field shows its placeholder. The default props
/// are the item-creator's ("What do you need to do?", size 50, max 50).
pub fn input(props: InputProps) -> Node {
    Node {
        kind: NodeKind::Input {
            placeholder: props.placeholder,
            size: props.size,
            max_length: props.max_length,
        },
        content: String::new(),
        attrs: Attr::NONE,
        children: Vec::new(),
    }
}
