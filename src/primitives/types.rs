//! Shared primitive prop types.

use crate::node::Node;
use crate::types::Attr;

/// Props for [`block`](super::block).
#[derive(Default)]
pub struct BlockProps {
    pub children: Vec<Node>,
}

/// Props for [`text`](super::text).
#[derive(Default)]
pub struct TextProps {
    pub content: String,
    pub attrs: Attr,
}

/// Props for [`input`](super::input).
pub struct InputProps {
    pub placeholder: String,
    pub size: u16,
    pub max_length: u16,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            placeholder: "What do you need to do?".to_string(),
            size: 50,
            max_length: 50,
        }
    }
}
