//! Rendering slides into pixel buffers.

use crate::config::RenderConfig;
use crate::font::FontFace;
use crate::image::RenderedImage;
use crate::layout::{layout_lines, wrap_text};
use crate::slide::SlideSpec;
use image::RgbImage;

/// Lay out and draw a slide with an already resolved font face.
///
/// The text is split on manual line breaks and word-wrapped to `spec.wrap_width`
/// characters. Each line's ink is measured; the lines are then centred vertically as a
/// block and horizontally one by one, and drawn in the foreground colour over a canvas
/// filled with the background colour. The result depends only on the inputs, so
/// rendering the same slide twice gives identical pixels.
pub fn layout(spec: &SlideSpec, face: &FontFace) -> RenderedImage {
    let lines = wrap_text(&spec.text, spec.wrap_width);
    let block = layout_lines(
        &lines,
        face,
        spec.font_size,
        spec.canvas,
        spec.line_spacing,
        spec.overflow,
        spec.min_font_size,
    );

    let (width, height) = spec.canvas;
    let mut pixels = RgbImage::from_pixel(width, height, spec.background.into());
    for line in block.lines.iter() {
        face.draw(
            &line.metrics.text,
            block.font_size,
            line.pen(),
            spec.foreground,
            &mut pixels,
        );
    }

    log::debug!(
        "rendered {} line(s) at {}px with {}",
        block.lines.len(),
        block.font_size,
        face.name()
    );

    RenderedImage {
        pixels,
        layout: block,
    }
}

/// Resolve the font named by `config` and render the slide with it. A font that can't
/// be loaded is replaced by a fallback and never causes an error.
pub fn render_slide(spec: &SlideSpec, config: &RenderConfig) -> RenderedImage {
    let face = config.resolve_font();
    layout(spec, &face)
}
