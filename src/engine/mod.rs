//! Reactive Mount Engine.
//!
//! One mount point, one root component, one ordered sequence of state
//! slots. The engine re-runs the whole root on every state write and
//! replaces the mounted subtree wholesale - no diffing, no reconciliation,
//! no component identity across passes.
//!
//! - [`mount`]: [`Engine`] lifecycle and the [`Backend`] seam
//! - [`hooks`]: positional hook slots and [`Setter`]

mod hooks;
mod mount;

pub use hooks::Setter;
pub use mount::{Backend, Engine};
