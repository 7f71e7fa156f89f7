//! UI primitives - component building blocks.
//!
//! Props-struct builders that return [`Node`](crate::node::Node) values:
//!
//! - [`block`] - container; block children stack, inline children flow
//! - [`text`] - styled display text
//! - [`checkbox`] / [`input`] - control markers
//! - [`views`] - the composed todo components built from the above
//!
//! Nodes are values with no identity: a component here is just a function
//! you call again on the next render pass.

mod block;
mod control;
mod text;
mod types;
pub mod views;

pub use block::block;
pub use control::{checkbox, input};
pub use text::text;
pub use types::{BlockProps, InputProps, TextProps};
