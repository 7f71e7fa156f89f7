//! Text primitive - styled display text.

use crate::node::{Node, NodeKind};

use super::types::TextProps;

/// Create a text node with optional attributes.
///
/// # Example
///
/// ```
/// use wick_ui::primitives::{text, TextProps};
/// use wick_ui::Attr;
///
/// let done = text(TextProps {
///     content: "water plants".into(),
///     attrs: Attr::STRIKETHROUGH,
/// });
/// assert!(done.attrs.contains(Attr::STRIKETHROUGH));
/// ```
pub fn text(props: TextProps) -> Node {
    Node {
        kind: NodeKind::Text,
        content: props.content,
        attrs: props.attrs,
        children: Vec::new(),
    }
}
