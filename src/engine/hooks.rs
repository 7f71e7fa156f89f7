//! Hook slots - positionally indexed state cells.
//!
//! State created during a render pass lives in an ordered sequence of
//! type-erased cells. Slots are keyed by call order, not by name: the Nth
//! `use_state` call of a pass always lands on the Nth slot. A cursor walks
//! the sequence during each pass and is reset to zero when the pass ends.
//!
//! # Hook discipline
//!
//! Every render pass must call `use_state` the same number of times, in the
//! same order, with the same types. Nothing enforces this. A pass that
//! diverges silently shifts every slot after the divergence point, so later
//! calls read state that belongs to other call sites. When a misaligned call
//! asks a slot for a different type than it holds, the downcast cannot
//! produce a value and the engine panics instead of fabricating one.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::trace;

// =============================================================================
// Refresh Sink
// =============================================================================

/// Internal seam between setters and the engine. A setter holds a weak
/// reference to the engine through this trait so `Setter<T>` never has to
/// name the backend type.
pub(crate) trait RefreshSink {
    /// Re-render after a slot write. Backend errors are logged, not
    /// propagated; a setter has no result channel to surface them through.
    fn refresh_after_set(&self);
}

// =============================================================================
// State Cell
// =============================================================================

/// A single persistent state cell. Lives behind `Rc` so the slot sequence,
/// the returned setter, and any clones all point at the same value.
pub(crate) struct StateCell<T> {
    pub(crate) value: RefCell<T>,
}

// =============================================================================
// Hook Sequence
// =============================================================================

/// The ordered slot sequence plus the per-pass cursor.
pub(crate) struct HookSequence {
    slots: RefCell<Vec<Rc<dyn Any>>>,
    cursor: Cell<usize>,
}

impl HookSequence {
    pub(crate) fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            cursor: Cell::new(0),
        }
    }

    /// Current cursor position. Zero outside a render pass.
    pub(crate) fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Number of slots ever created.
    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Reset the cursor for the next render pass.
    pub(crate) fn reset_cursor(&self) {
        self.cursor.set(0);
    }

    /// Consume the next slot position: return the cached cell if one exists
    /// there, otherwise create it from `initial`. The cursor advances by one
    /// either way. `initial` is only evaluated for a fresh slot.
    ///
    /// # Panics
    ///
    /// Panics when the cached cell at this position holds a different type -
    /// the signature of a hook-order violation that crossed a type boundary.
    pub(crate) fn next_cell<T: 'static>(&self, initial: impl FnOnce() -> T) -> Rc<StateCell<T>> {
        let index = self.cursor.get();
        self.cursor.set(index + 1);

        let cached = self.slots.borrow().get(index).cloned();
        match cached {
            Some(slot) => match slot.downcast::<StateCell<T>>() {
                Ok(cell) => cell,
                Err(_) => panic!(
                    "hook order violated: slot {index} holds a different type; \
                     use_state must run in the same order and count on every render pass"
                ),
            },
            None => {
                trace!(index, "new hook slot");
                let cell = Rc::new(StateCell {
                    value: RefCell::new(initial()),
                });
                // Cursor only ever advances one past the end, so this slot
                // lands exactly at `index`.
                self.slots.borrow_mut().push(cell.clone());
                cell
            }
        }
    }
}

// =============================================================================
// Setter
// =============================================================================

/// Writes a new value into its slot and synchronously re-renders.
///
/// Cloning a setter aims the clone at the same slot. The engine reference is
/// weak: a setter that outlives its engine still writes the cell but the
/// refresh becomes a no-op.
///
/// Calling a setter while a render pass is still building its subtree is
/// undefined behavior: the nested refresh resets the cursor underneath the
/// outer pass, which then re-consumes slots out of order. This mirrors the
/// unguarded behavior of the model this engine is built from.
pub struct Setter<T> {
    cell: Rc<StateCell<T>>,
    engine: Weak<dyn RefreshSink>,
}

impl<T: 'static> Setter<T> {
    pub(crate) fn new(cell: Rc<StateCell<T>>, engine: Weak<dyn RefreshSink>) -> Self {
        Self { cell, engine }
    }

    /// Overwrite the slot value and trigger a refresh.
    pub fn set(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        if let Some(engine) = self.engine.upgrade() {
            engine.refresh_after_set();
        }
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            engine: self.engine.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_and_resets() {
        let hooks = HookSequence::new();
        assert_eq!(hooks.cursor(), 0);

        hooks.next_cell(|| 1i32);
        hooks.next_cell(|| 2i32);
        assert_eq!(hooks.cursor(), 2);
        assert_eq!(hooks.len(), 2);

        hooks.reset_cursor();
        assert_eq!(hooks.cursor(), 0);
        assert_eq!(hooks.len(), 2);
    }

    #[test]
    fn test_cached_cell_ignores_initial() {
        let hooks = HookSequence::new();

        let cell = hooks.next_cell(|| 10i32);
        *cell.value.borrow_mut() = 42;
        hooks.reset_cursor();

        // Second pass: same position, different initial. Cached value wins
        // and the initializer must not even run.
        let cell = hooks.next_cell(|| -> i32 { panic!("initial re-evaluated") });
        assert_eq!(*cell.value.borrow(), 42);
    }

    #[test]
    fn test_slot_identity_across_passes() {
        let hooks = HookSequence::new();

        let first = hooks.next_cell(|| String::from("a"));
        hooks.reset_cursor();
        let second = hooks.next_cell(|| String::from("b"));

        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    #[should_panic(expected = "hook order violated")]
    fn test_type_divergence_panics() {
        let hooks = HookSequence::new();

        hooks.next_cell(|| 1i32);
        hooks.reset_cursor();
        hooks.next_cell(|| String::from("not an i32"));
    }
}
