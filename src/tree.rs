//! In-memory display tree backend.
//!
//! The reference implementation of the [`Backend`] contract: a flat set of
//! named anchors standing in for "elements with an id", one of which can
//! become the mount point. `replace_children` stores the subtree and counts
//! the call, which is exactly what the engine's testable properties need -
//! every full reconstruction is observable as one count tick.

use std::io;

use crate::engine::Backend;
use crate::node::Node;

/// In-memory display tree with named anchors.
///
/// Also the test backend: after mounting, [`subtree`](Self::subtree) is the
/// current frame and [`replace_count`](Self::replace_count) the number of
/// full reconstructions performed.
#[derive(Debug, Default)]
pub struct TreeBackend {
    anchors: Vec<String>,
    mount_anchor: Option<String>,
    subtree: Option<Node>,
    replace_count: u64,
}

impl TreeBackend {
    /// Create a backend with no anchors. Every mount target fails to
    /// resolve until [`with_anchor`](Self::with_anchor) adds one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an anchor id, builder style.
    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.push(id.into());
        self
    }

    /// The anchor the engine mounted at, if any.
    pub fn mount_anchor(&self) -> Option<&str> {
        self.mount_anchor.as_deref()
    }

    /// The subtree from the most recent render pass.
    pub fn subtree(&self) -> Option<&Node> {
        self.subtree.as_ref()
    }

    /// How many times the mounted subtree was replaced.
    pub fn replace_count(&self) -> u64 {
        self.replace_count
    }
}

impl Backend for TreeBackend {
    type Node = Node;

    fn resolve(&mut self, target: &str) -> bool {
        if self.anchors.iter().any(|a| a == target) {
            self.mount_anchor = Some(target.to_string());
            true
        } else {
            false
        }
    }

    fn replace_children(&mut self, subtree: Node) -> io::Result<()> {
        self.subtree = Some(subtree);
        self.replace_count += 1;
        Ok(())
    }
}
