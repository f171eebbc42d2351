//! Pre-defined canvas sizes for common video frame formats.
//!
//! All sizes are provided in landscape orientation (width, height) where width ≥ height,
//! in pixels. Use the [`CanvasOrientation`](crate::canvas::CanvasOrientation) trait to
//! convert between landscape and portrait.
//!
//! # Example
//!
//! ```
//! use slide_gen::canvas::{CanvasOrientation, HD_720, FULL_HD_1080};
//!
//! // use a standard size
//! let canvas = HD_720;
//! assert_eq!(canvas, (1280, 720));
//!
//! // convert to portrait for vertical video
//! let vertical = FULL_HD_1080.portrait();
//! assert_eq!(vertical, (1080, 1920));
//! assert_eq!(vertical.landscape(), FULL_HD_1080);
//! assert_eq!(canvas.landscape(), canvas);
//! ```

/// Canvas dimensions as (width, height) in pixels.
pub type CanvasSize = (u32, u32);

pub const HD_720: CanvasSize = (1280, 720);
pub const FULL_HD_1080: CanvasSize = (1920, 1080);

/// Convert canvas sizes between portrait and landscape orientations.
pub trait CanvasOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl CanvasOrientation for CanvasSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> CanvasSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
