//! Core types for wick-ui.
//!
//! These types define the foundation that everything builds on.
//! They flow from the primitives through the engine to the renderers.

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::STRIKETHROUGH`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
    }
}

// =============================================================================
// Render Mode
// =============================================================================

/// How the terminal backend replaces the mounted subtree on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Erase the previously written block and rewrite it in place.
    /// The terminal rendition of a DOM `replaceChildren`.
    #[default]
    Inline,
    /// Re-print the subtree below the previous output. Old frames scroll
    /// up into terminal history.
    Append,
}
