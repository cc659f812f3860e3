//! Pseudo vertical text transform
//!
//! Re-encodes horizontal multi-line text as a transposed grid of characters
//! so that a renderer that only knows horizontal lines shows it as columns.
//! A single trailing newline marks text that has already been transposed.

pub mod direction;
pub mod marker;
pub mod padding;
pub mod transpose;

pub use direction::LineDirection;
pub use marker::{is_vertical, Representation, MARKER};
pub use padding::PADDING_CHAR;
pub use transpose::{to_horizontal, to_vertical, toggle};
