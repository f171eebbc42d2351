//! Lay out and rasterise the text slides of an explainer video.
//!
//! Each slide's text is word-wrapped, centred on a solid background and drawn into an
//! opaque RGB buffer ready to be held as a still frame by a video encoder. Narration
//! and encoding are left to other tools; [timing] derives how long each still should
//! stay on screen once the narration length is known.
//!
//! ```
//! use slide_gen::{render::layout, BuiltinFont, FontFace, SlideSpec};
//!
//! let spec = SlideSpec::new("CAC Registered.\nSEO Optimized.");
//! let slide = layout(&spec, &FontFace::Builtin(BuiltinFont));
//!
//! assert_eq!(slide.size(), (1280, 720));
//! let lines: Vec<&str> = slide.lines().iter().map(|l| l.metrics.text.as_str()).collect();
//! assert_eq!(lines, vec!["CAC Registered.", "SEO Optimized."]);
//! ```

mod builtin;
pub use builtin::*;

/// Pre-defined canvas sizes
pub mod canvas;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod deck;
pub use deck::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Utility functions and structures to wrap and position text on a slide
pub mod layout;

mod rect;
pub use rect::*;

pub mod render;
pub use render::render_slide;

mod script;
pub use script::*;

mod slide;
pub use slide::*;

pub mod timing;

mod units;
pub use units::*;

pub use layout::OverflowPolicy;
