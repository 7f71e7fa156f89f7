//! # wick-ui
//!
//! Hook-based reactive mount engine for terminal UIs.
//!
//! One mount point, one root component, positionally-indexed state slots.
//! Writing a slot re-runs the whole root and replaces the mounted subtree
//! wholesale - there is no diffing, no reconciliation, and no component
//! identity across render passes. The model is deliberately small; its
//! sharp edges (hook-order discipline, reentrant setters) are documented
//! rather than papered over.
//!
//! ## Architecture
//!
//! ```text
//! root component -> Node subtree -> Backend::replace_children -> screen
//!        ^                                                         |
//!        '---------------- Setter::set triggers refresh -----------'
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - the [`Engine`], [`Backend`] seam, and hook slots
//! - [`node`] - display-tree values the bundled backends speak
//! - [`tree`] - in-memory backend (tests, headless use)
//! - [`renderer`] - ANSI line renderer and the [`TermBackend`]
//! - [`primitives`] - props-struct component builders and todo views
//! - [`todo`] - todo items, lists, and the in-memory store
//! - [`api`] - the REST collaborator: router, wire types, error taxonomy
//!
//! ## Example
//!
//! ```
//! use wick_ui::{Engine, TreeBackend};
//! use wick_ui::primitives::views::todo_list_view;
//! use wick_ui::todo::TodoItem;
//!
//! let engine = Engine::new(TreeBackend::new().with_anchor("root"));
//! let handle = engine.clone();
//! engine
//!     .mount("root", move || {
//!         let (items, _set_items) = handle.use_state(vec![TodoItem::new(1, "Apples")]);
//!         todo_list_view(&items)
//!     })
//!     .unwrap();
//!
//! assert_eq!(engine.passes(), 1);
//! ```

pub mod api;
pub mod engine;
pub mod node;
pub mod primitives;
pub mod renderer;
pub mod todo;
pub mod tree;
pub mod types;

// Re-export the working set.
pub use engine::{Backend, Engine, Setter};
pub use node::{Node, NodeKind};
pub use renderer::TermBackend;
pub use tree::TreeBackend;
pub use types::{Attr, RenderMode};
