use crate::canvas::CanvasSize;
use crate::layout::{PlacedLine, TextBlock};
use crate::SlideError;
use image::{ImageFormat, RgbImage};
use std::io::{Seek, Write};
use std::path::Path;

/// A finished slide: an opaque RGB pixel buffer the size of the canvas, together with
/// the layout that produced it.
///
/// ```
/// use slide_gen::{render::layout, BuiltinFont, FontFace, SlideSpec};
///
/// let slide = layout(&SlideSpec::new("Claim Free.").with_canvas((64, 32)), &BuiltinFont.into());
/// assert_eq!(slide.lines().len(), 1);
///
/// // hand the frame over to an encoder
/// let frame = slide.into_pixels();
/// assert_eq!(frame.dimensions(), (64, 32));
/// assert_eq!(frame.as_raw().len(), 64 * 32 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub pixels: RgbImage,
    pub layout: TextBlock,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> CanvasSize {
        self.pixels.dimensions()
    }

    /// The wrapped lines, in order, with their ink boxes positioned on the canvas
    pub fn lines(&self) -> &[PlacedLine] {
        &self.layout.lines
    }

    /// Raw pixel data, three bytes per pixel, row-major from the top-left corner
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Give up the layout information and keep only the pixels
    pub fn into_pixels(self) -> RgbImage {
        self.pixels
    }

    /// Encode the slide as a PNG into `writer`
    pub fn write_png<W: Write + Seek>(&self, writer: &mut W) -> Result<(), SlideError> {
        self.pixels.write_to(writer, ImageFormat::Png)?;
        Ok(())
    }

    /// Save the slide to disk as a PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SlideError> {
        self.pixels
            .save_with_format(path.as_ref(), ImageFormat::Png)?;
        Ok(())
    }
}
