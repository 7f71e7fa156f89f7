//! Mount API - engine lifecycle and the refresh loop.
//!
//! The [`Engine`] owns exactly one mount point and one root component. It
//! starts UNMOUNTED; [`Engine::mount`] binds it to a display-tree location
//! and performs the first render. There is no transition back: once mounted,
//! the engine re-renders the same location until it is dropped.
//!
//! Every refresh is a full replace. The root component builds a fresh
//! subtree from scratch and the backend swaps it in for whatever was there
//! before. There is no diffing, no reconciliation, and no node identity
//! across passes - external resources tied to the old subtree must be
//! released by their owner before the next refresh, because no unmount hook
//! exists.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use tracing::{debug, warn};

use super::hooks::{HookSequence, RefreshSink, Setter};

// =============================================================================
// Backend
// =============================================================================

/// The display-tree collaborator seam.
///
/// The engine never looks inside a subtree; it only needs the backend to
/// resolve a mount target and to atomically replace everything under it.
pub trait Backend {
    /// Opaque subtree representation the backend knows how to attach.
    type Node;

    /// Bind the mount point to `target`. Returns `false` when the target
    /// does not exist, in which case the engine stays unmounted and every
    /// later refresh is a no-op.
    fn resolve(&mut self, target: &str) -> bool;

    /// Replace all children of the mount point with `subtree`.
    fn replace_children(&mut self, subtree: Self::Node) -> io::Result<()>;
}

// =============================================================================
// Engine
// =============================================================================

type RootFn<N> = Box<dyn Fn() -> N>;

struct EngineInner<B: Backend> {
    backend: RefCell<B>,
    root: RefCell<Option<RootFn<B::Node>>>,
    mounted: Cell<bool>,
    hooks: HookSequence,
    /// Completed render passes, for diagnostics and tests.
    passes: Cell<u64>,
}

/// The reactive mount engine.
///
/// A cheaply cloneable handle; clones share the mount point, root component,
/// and hook slots. Construct one per mount - there is no global instance, so
/// tests and embedders can run independent engines side by side.
///
/// # Example
///
/// ```ignore
/// use wick_ui::{Engine, TreeBackend, Node};
///
/// let engine = Engine::new(TreeBackend::new().with_anchor("root"));
/// let handle = engine.clone();
/// engine.mount("root", move || {
///     let (items, set_items) = handle.use_state(Vec::<String>::new());
///     // build and return a Node from `items`...
///     # Node::block()
/// })?;
/// ```
pub struct Engine<B: Backend> {
    inner: Rc<EngineInner<B>>,
}

impl<B: Backend> Clone for Engine<B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B: Backend + 'static> Engine<B> {
    /// Create an unmounted engine owning `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            inner: Rc::new(EngineInner {
                backend: RefCell::new(backend),
                root: RefCell::new(None),
                mounted: Cell::new(false),
                hooks: HookSequence::new(),
                passes: Cell::new(0),
            }),
        }
    }

    /// Bind the engine to a display-tree location and a root component,
    /// then render once.
    ///
    /// When `target` does not resolve, the engine stays unmounted: the root
    /// is stored but this and every later [`refresh`](Self::refresh) is a
    /// no-op (the hook cursor is still reset, matching the unmounted
    /// behavior of the model).
    pub fn mount(&self, target: &str, root: impl Fn() -> B::Node + 'static) -> io::Result<()> {
        let resolved = self.inner.backend.borrow_mut().resolve(target);
        *self.inner.root.borrow_mut() = Some(Box::new(root));
        if resolved {
            self.inner.mounted.set(true);
            debug!(anchor = target, "mounted");
        } else {
            warn!(anchor = target, "mount target did not resolve; refresh will no-op");
        }
        self.refresh()
    }

    /// Re-invoke the root component and replace the mounted subtree with
    /// its output, then reset the hook cursor for the next pass.
    ///
    /// A panic in the root component propagates to the caller and leaves
    /// the previous subtree in place - there is no rollback. A backend
    /// error propagates the same way.
    pub fn refresh(&self) -> io::Result<()> {
        self.inner.render_pass()
    }

    /// The `useState` analog: positional persistent state.
    ///
    /// The first call at a given cursor position stores `initial` in a new
    /// slot. Every later pass that reaches the same position gets the
    /// cached slot back - `initial` is ignored - with whatever value the
    /// last setter call wrote. The returned [`Setter`] writes the slot and
    /// synchronously triggers a refresh.
    ///
    /// # Hook discipline
    ///
    /// Call `use_state` in the same order and count on every pass. See the
    /// [`hooks`](super::hooks) module docs for what happens when you don't.
    pub fn use_state<T: Clone + 'static>(&self, initial: T) -> (T, Setter<T>) {
        let cell = self.inner.hooks.next_cell(|| initial);
        let value = cell.value.borrow().clone();
        let sink: Rc<dyn RefreshSink> = self.inner.clone();
        (value, Setter::new(cell, Rc::downgrade(&sink)))
    }

    /// Whether `mount` has bound a real location.
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Completed render passes since construction.
    pub fn passes(&self) -> u64 {
        self.inner.passes.get()
    }

    /// Number of hook slots created so far.
    pub fn hook_count(&self) -> usize {
        self.inner.hooks.len()
    }

    /// Hook cursor position. Zero whenever no render pass is running; any
    /// other value observed outside a pass means the discipline was broken.
    pub fn hook_cursor(&self) -> usize {
        self.inner.hooks.cursor()
    }

    /// Inspect the backend. Tests use this to look at the mounted subtree.
    pub fn with_backend<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(&self.inner.backend.borrow())
    }
}

impl<B: Backend> EngineInner<B> {
    fn render_pass(&self) -> io::Result<()> {
        let result = if self.mounted.get() {
            let pass = self.passes.get() + 1;
            debug!(pass, "render pass");

            // Build the subtree before borrowing the backend mutably. The
            // root only takes a shared borrow of itself, so a reentrant
            // refresh from inside the pass re-enters here cleanly (and then
            // corrupts the cursor, as documented - not our problem to fix).
            let subtree = {
                let root = self.root.borrow();
                root.as_ref().map(|root| root())
            };

            match subtree {
                Some(subtree) => {
                    let replaced = self.backend.borrow_mut().replace_children(subtree);
                    if replaced.is_ok() {
                        self.passes.set(pass);
                    }
                    replaced
                }
                None => Ok(()),
            }
        } else {
            Ok(())
        };

        // The reset must survive a backend failure: a dangling cursor would
        // make every later pass consume slots from a mid-pass offset.
        self.hooks.reset_cursor();
        result
    }
}

impl<B: Backend> RefreshSink for EngineInner<B> {
    fn refresh_after_set(&self) {
        if let Err(err) = self.render_pass() {
            warn!(%err, "setter-triggered refresh failed");
        }
    }
}
