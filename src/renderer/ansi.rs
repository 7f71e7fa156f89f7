//! ANSI escape sequences for terminal control.
//!
//! The subset the line renderer needs: cursor movement for in-place
//! rewrites, erasing, and SGR text attributes.

use std::io::{self, Write};

use crate::types::Attr;

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move cursor up by n rows.
#[inline]
pub fn cursor_up<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n > 0 {
        write!(w, "\x1b[{}A", n)
    } else {
        Ok(())
    }
}

/// Move cursor to beginning of line.
#[inline]
pub fn cursor_column_zero<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[G")
}

// =============================================================================
// Erasing
// =============================================================================

/// Erase from cursor to end of screen.
#[inline]
pub fn erase_down<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[J")
}

// =============================================================================
// Text Attributes (SGR)
// =============================================================================

/// Reset all attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Apply a set of text attributes as one SGR sequence.
///
/// Emits nothing for `Attr::NONE`.
pub fn apply_attrs<W: Write>(w: &mut W, attrs: Attr) -> io::Result<()> {
    if attrs.is_empty() {
        return Ok(());
    }
    let mut codes: Vec<&str> = Vec::with_capacity(5);
    if attrs.contains(Attr::BOLD) {
        codes.push("1");
    }
    if attrs.contains(Attr::DIM) {
        codes.push("2");
    }
    if attrs.contains(Attr::ITALIC) {
        codes.push("3");
    }
    if attrs.contains(Attr::UNDERLINE) {
        codes.push("4");
    }
    if attrs.contains(Attr::STRIKETHROUGH) {
        codes.push("9");
    }
    write!(w, "\x1b[{}m", codes.join(";"))
}
