//! Text layout utilities for positioning slide text on a canvas.
//!
//! Layout happens in two phases:
//!
//! - [`wrap_text`](crate::layout::wrap_text) splits the text on manual line breaks and
//!   greedily word-wraps each segment to a character budget, never splitting a word
//! - [`layout_lines`](crate::layout::layout_lines) measures the ink of every wrapped
//!   line, centres the stack of lines vertically as one block and each line
//!   horizontally on its own, and resolves vertical overflow per [`OverflowPolicy`]
//!
//! # Example
//!
//! ```
//! use slide_gen::layout::{layout_lines, wrap_text, OverflowPolicy};
//! use slide_gen::{BuiltinFont, FontFace, Px};
//!
//! let face = FontFace::Builtin(BuiltinFont);
//! let lines = wrap_text("CAC Registered.\nSEO Optimized.", 20);
//! assert_eq!(lines, vec!["CAC Registered.", "SEO Optimized."]);
//!
//! let block = layout_lines(
//!     &lines,
//!     &face,
//!     Px(70.0),
//!     (1280, 720),
//!     Px(10.0),
//!     OverflowPolicy::ShrinkToFit,
//!     Px(12.0),
//! );
//! assert_eq!(block.lines.len(), 2);
//! assert!(block.fits((1280, 720)));
//! ```

mod text;
mod wrap;

pub use text::*;
pub use wrap::*;
