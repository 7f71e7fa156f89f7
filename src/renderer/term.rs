//! Terminal backend - mounts a subtree on the terminal.
//!
//! Implements the engine's [`Backend`] contract for a terminal screen.
//! "Replace children" becomes one of two write strategies, selected by
//! [`RenderMode`]:
//!
//! - `Inline`: move the cursor back up over the previous frame, erase it,
//!   and write the new frame in place. The closest terminal analog of a
//!   DOM `replaceChildren`.
//! - `Append`: write the new frame below the old one; history scrolls up
//!   into the terminal scrollback.
//!
//! A terminal has no element ids, so the mount "target" is a convention:
//! any non-empty target resolves to the one screen there is.

use std::io::{self, Write};

use crate::engine::Backend;
use crate::node::Node;
use crate::types::RenderMode;

use super::ansi;
use super::lines::{render_lines, write_line};
use super::output::OutputBuffer;

/// Fallback width when the terminal size cannot be detected.
const DEFAULT_WIDTH: u16 = 80;

/// Terminal-screen implementation of [`Backend`].
pub struct TermBackend {
    mode: RenderMode,
    output: OutputBuffer,
    sink: Box<dyn Write>,
    /// Fixed width override; when `None` the terminal is asked per frame.
    width: Option<u16>,
    previous_height: u16,
    resolved: bool,
}

impl TermBackend {
    /// Create a backend writing to stdout, detecting the terminal width
    /// per frame.
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            output: OutputBuffer::new(),
            sink: Box::new(io::stdout()),
            width: None,
            previous_height: 0,
            resolved: false,
        }
    }

    /// Create a backend writing to an arbitrary writer with a fixed width.
    /// This is the test and non-tty constructor.
    pub fn with_writer(mode: RenderMode, sink: Box<dyn Write>, width: u16) -> Self {
        Self {
            mode,
            output: OutputBuffer::new(),
            sink,
            width: Some(width),
            previous_height: 0,
            resolved: false,
        }
    }

    /// The mode this backend renders in.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Height of the previously written frame, in lines.
    pub fn previous_height(&self) -> u16 {
        self.previous_height
    }

    fn frame_width(&self) -> u16 {
        match self.width {
            Some(w) => w,
            None => crossterm::terminal::size()
                .map(|(w, _)| w)
                .unwrap_or(DEFAULT_WIDTH),
        }
    }
}

impl Backend for TermBackend {
    type Node = Node;

    fn resolve(&mut self, target: &str) -> bool {
        // One screen, no ids. Any named target is the screen.
        self.resolved = !target.is_empty();
        self.resolved
    }

    fn replace_children(&mut self, subtree: Node) -> io::Result<()> {
        debug_assert!(self.resolved, "replace_children before resolve");

        // A failed flush leaves the aborted frame's bytes buffered; they
        // must not be prepended to this frame.
        self.output.clear();

        let width = self.frame_width() as usize;
        let mut lines = render_lines(&subtree);
        // Soft-wrapped lines would break the cursor-up arithmetic below.
        for line in &mut lines {
            line.truncate(width);
        }

        if self.mode == RenderMode::Inline && self.previous_height > 0 {
            ansi::cursor_up(&mut self.output, self.previous_height)?;
            ansi::cursor_column_zero(&mut self.output)?;
            ansi::erase_down(&mut self.output)?;
        }

        for line in &lines {
            write_line(&mut self.output, line)?;
            self.output.write_char('\n');
        }

        self.output.flush_to(self.sink.as_mut())?;
        self.previous_height = lines.len() as u16;
        Ok(())
    }
}
