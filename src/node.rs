//! Display-tree nodes.
//!
//! A [`Node`] is one element of the subtree a root component produces on
//! every render pass. The engine treats subtrees as opaque (see
//! [`Backend::Node`](crate::engine::Backend::Node)); this concrete type is
//! what the bundled backends and primitives speak.
//!
//! Nodes are plain values. There is no identity across render passes and no
//! reconciliation: a refresh replaces the whole subtree, so a node only ever
//! lives for one frame.

use crate::types::Attr;

// =============================================================================
// NodeKind
// =============================================================================

/// What a node is, which decides how the renderers draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Container. Draws nothing itself; its children render in order.
    Block,
    /// A run of styled text.
    Text,
    /// A checked/unchecked marker rendered as `[x]` or `[ ]`.
    Checkbox { checked: bool },
    /// A text-entry field. Renders its placeholder until a real input
    /// system fills it (none exists here; the field is presentational).
    Input {
        placeholder: String,
        size: u16,
        max_length: u16,
    },
}

// =============================================================================
// Node
// =============================================================================

/// One element of a display subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Text payload for `Text` nodes; empty otherwise.
    pub content: String,
    /// Text attributes applied when drawing this node's content.
    pub attrs: Attr,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty container node.
    pub fn block() -> Self {
        Self {
            kind: NodeKind::Block,
            content: String::new(),
            attrs: Attr::NONE,
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            content: content.into(),
            attrs: Attr::NONE,
            children: Vec::new(),
        }
    }

    /// Attach a child, builder style.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Set text attributes, builder style.
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    /// Count every node in this subtree, including self.
    pub fn descendant_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::descendant_count)
            .sum::<usize>()
    }

    /// Depth-first search for the first text node containing `needle`.
    /// Test helper for asserting on rendered trees.
    pub fn find_text(&self, needle: &str) -> Option<&Node> {
        if self.kind == NodeKind::Text && self.content.contains(needle) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_text(needle))
    }
}
