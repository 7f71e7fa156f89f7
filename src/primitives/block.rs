//! Block primitive - the container.
//!
//! A block draws nothing itself; it stacks its block children vertically
//! and lets inline children (text, checkboxes, inputs) flow onto one line.
//! The div analog.

use crate::node::{Node, NodeKind};
use crate::types::Attr;

use super::types::BlockProps;

/// Create a container node.
///
/// # Example
///
/// ```
/// use wick_ui::primitives::{block, text, BlockProps, TextProps};
///
/// let row = block(BlockProps {
///     children: vec![text(TextProps {
///         content: "hello".into(),
///         ..Default::default()
///     })],
/// });
/// assert_eq!(row.children.len(), 1);
/// ```
pub fn block(props: BlockProps) -> Node {
    Node {
        kind: NodeKind::Block,
        content: String::new(),
        attrs: Attr::NONE,
        children: props.children,
    }
}
