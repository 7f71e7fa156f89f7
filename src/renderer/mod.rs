//! Terminal renderer.
//!
//! Turns display subtrees into terminal output:
//! - [`ansi`] - escape sequence helpers
//! - [`output`] - batched output buffer
//! - [`lines`] - subtree flattening into styled lines
//! - [`term`] - the [`TermBackend`] the engine mounts on

pub mod ansi;
mod lines;
mod output;
mod term;

pub use lines::{render_lines, render_plain, write_line, Line, Span};
pub use output::OutputBuffer;
pub use term::TermBackend;
