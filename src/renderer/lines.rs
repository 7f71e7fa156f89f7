//! Subtree flattening - from [`Node`] trees to styled terminal lines.
//!
//! There is no layout engine here. Blocks stack vertically, everything else
//! flows inline onto the current line. That is the whole model: each render
//! pass produces a fresh list of lines and the terminal backend writes them
//! out wholesale.

use std::io::{self, Write};

use crate::node::{Node, NodeKind};
use crate::types::Attr;

use super::ansi;

// =============================================================================
// Styled Lines
// =============================================================================

/// A run of text with one attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub attrs: Attr,
    pub text: String,
}

/// One terminal line, as a sequence of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, attrs: Attr, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.spans.push(Span { attrs, text });
    }

    /// The line's text without any styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Visible width in characters.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Cut the line down to at most `width` visible characters.
    ///
    /// Lines wider than the terminal would soft-wrap and break the
    /// cursor-up arithmetic of the inline rewrite, so the terminal backend
    /// truncates every line before writing it.
    pub fn truncate(&mut self, width: usize) {
        let mut remaining = width;
        self.spans.retain_mut(|span| {
            if remaining == 0 {
                return false;
            }
            let chars = span.text.chars().count();
            if chars > remaining {
                span.text = span.text.chars().take(remaining).collect();
            }
            remaining = remaining.saturating_sub(chars);
            true
        });
    }
}

// =============================================================================
// Flattening
// =============================================================================

/// Flatten a subtree into styled lines.
///
/// Rules:
/// - `Block` children stack: each nested block flushes the line being built
///   and contributes its own lines.
/// - `Text`, `Checkbox`, and `Input` flow inline onto the current line.
/// - Children of non-block nodes are ignored; only blocks contain.
pub fn render_lines(node: &Node) -> Vec<Line> {
    let mut lines = Vec::new();
    match node.kind {
        NodeKind::Block => flatten_block(node, &mut lines),
        _ => {
            let mut line = Line::default();
            render_inline(node, &mut line);
            lines.push(line);
        }
    }
    lines
}

/// Flatten a subtree and join the plain text of every line. Handy for
/// tests and non-terminal consumers.
pub fn render_plain(node: &Node) -> String {
    render_lines(node)
        .iter()
        .map(Line::plain)
        .collect::<Vec<_>>()
        .join("\n")
}

fn flatten_block(block: &Node, lines: &mut Vec<Line>) {
    let mut current = Line::default();
    for child in &block.children {
        if child.kind == NodeKind::Block {
            if !current.spans.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            flatten_block(child, lines);
        } else {
            render_inline(child, &mut current);
        }
    }
    if !current.spans.is_empty() {
        lines.push(current);
    }
}

fn render_inline(node: &Node, line: &mut Line) {
    match &node.kind {
        NodeKind::Text => line.push(node.attrs, node.content.as_str()),
        NodeKind::Checkbox { checked } => {
            line.push(node.attrs, if *checked { "[x] " } else { "[ ] " });
        }
        NodeKind::Input { placeholder, .. } => {
            // Presentational: show the placeholder, dimmed.
            line.push(node.attrs | Attr::DIM, placeholder.as_str());
        }
        NodeKind::Block => unreachable!("blocks are handled by flatten_block"),
    }
}

// =============================================================================
// Line Output
// =============================================================================

/// Write one styled line, emitting SGR sequences per span and a reset
/// after any styled span.
pub fn write_line<W: Write>(w: &mut W, line: &Line) -> io::Result<()> {
    for span in &line.spans {
        ansi::apply_attrs(w, span.attrs)?;
        w.write_all(span.text.as_bytes())?;
        if !span.attrs.is_empty() {
            ansi::reset(w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn checkbox(checked: bool) -> Node {
        Node {
            kind: NodeKind::Checkbox { checked },
            content: String::new(),
            attrs: Attr::NONE,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_blocks_stack_inline_flows() {
        let tree = Node::block()
            .child(
                Node::block()
                    .child(checkbox(true))
                    .child(Node::text("apples")),
            )
            .child(Node::block().child(checkbox(false)).child(Node::text("eggs")));

        let lines = render_lines(&tree);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].plain(), "[x] apples");
        assert_eq!(lines[1].plain(), "[ ] eggs");
    }

    #[test]
    fn test_render_plain_joins_lines() {
        let tree = Node::block()
            .child(Node::block().child(Node::text("one")))
            .child(Node::block().child(Node::text("two")));

        assert_eq!(render_plain(&tree), "one\ntwo");
    }

    #[test]
    fn test_empty_block_renders_nothing() {
        assert!(render_lines(&Node::block()).is_empty());
    }

    #[test]
    fn test_truncate_across_spans() {
        let mut line = Line::default();
        line.push(Attr::NONE, "[x] ");
        line.push(Attr::BOLD, "a long item text");

        line.truncate(8);
        assert_eq!(line.plain(), "[x] a lo");
        assert_eq!(line.width(), 8);
    }

    #[test]
    fn test_styled_span_gets_sgr_and_reset() {
        let mut line = Line::default();
        line.push(Attr::STRIKETHROUGH, "done");

        let mut out = Vec::new();
        write_line(&mut out, &line).unwrap();
        assert_eq!(out, b"\x1b[9mdone\x1b[0m");
    }
}
