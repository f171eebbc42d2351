use crate::canvas::CanvasSize;
use crate::font::FontFace;
use crate::rect::Rect;
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// The measured ink of a single wrapped line.
///
/// `width` and `height` are the size of the box actually covered by the rasterised
/// glyphs of `text`; `left` and `top` locate that box relative to the pen origin the
/// line is drawn from, so that the ink itself (rather than the font's ascender line)
/// can be positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMetrics {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
}

impl LineMetrics {
    pub fn from_ink(text: &str, ink: Rect) -> LineMetrics {
        LineMetrics {
            text: text.to_string(),
            width: ink.width(),
            height: ink.height(),
            left: ink.x1,
            top: ink.y1,
        }
    }
}

/// A line of text whose ink box has been positioned on the canvas. `(x, y)` is the
/// top-left corner of the ink box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub metrics: LineMetrics,
    pub x: i32,
    pub y: i32,
}

impl PlacedLine {
    /// Where the pen must start so that the ink box lands on `(x, y)`
    pub fn pen(&self) -> (i32, i32) {
        (self.x - self.metrics.left, self.y - self.metrics.top)
    }
}

/// What to do when a wrapped text block is taller than the canvas
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Centre the block anyway; its top and bottom lines run off the canvas
    Overflow,
    /// Pin the top of the block to the top of the canvas; lines run off the bottom
    Clamp,
    /// Reduce the font size until the block fits, down to a minimum size. If it still
    /// does not fit at the minimum size the block overflows.
    #[default]
    ShrinkToFit,
}

/// A fully positioned block of text, ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<PlacedLine>,
    /// The font size the block was measured at, which may be smaller than the requested
    /// size when the block was shrunk to fit
    pub font_size: Px,
    /// Top of the first line's ink box. Negative if the block overflows the canvas.
    pub start_y: i32,
    pub height: u32,
}

impl TextBlock {
    pub fn fits(&self, canvas: CanvasSize) -> bool {
        self.start_y >= 0 && self.start_y as i64 + self.height as i64 <= canvas.1 as i64
    }
}

/// The offset that centres something of size `inner` within `outer`, rounding towards
/// negative infinity. Negative when `inner` is larger than `outer`.
pub fn centre_offset(outer: u32, inner: u32) -> i32 {
    (outer as i64 - inner as i64).div_euclid(2) as i32
}

/// Total height of a stack of lines: the sum of the line heights plus `spacing` between
/// each pair of consecutive lines
pub fn block_height(lines: &[LineMetrics], spacing: Px) -> u32 {
    let gaps = lines.len().saturating_sub(1) as u32;
    let heights: u32 = lines.iter().map(|line| line.height).sum();
    heights + gaps * spacing.round().max(0) as u32
}

/// Measure every line with `face` at `size`, then centre the stack of lines vertically
/// as one block and each line horizontally on its own
pub fn place_lines(
    lines: &[String],
    face: &FontFace,
    size: Px,
    canvas: CanvasSize,
    spacing: Px,
) -> TextBlock {
    let metrics: Vec<LineMetrics> = lines.iter().map(|line| face.measure(line, size)).collect();
    let height = block_height(&metrics, spacing);
    let start_y = centre_offset(canvas.1, height);
    let step = spacing.round().max(0);

    let mut y = start_y;
    let mut placed = Vec::with_capacity(metrics.len());
    for metrics in metrics.into_iter() {
        let x = centre_offset(canvas.0, metrics.width);
        if x < 0 {
            log::warn!(
                "line {:?} is {}px wide and overflows the {}px canvas",
                metrics.text,
                metrics.width,
                canvas.0
            );
        }
        let advance = metrics.height as i32 + step;
        placed.push(PlacedLine { metrics, x, y });
        y += advance;
    }

    TextBlock {
        lines: placed,
        font_size: size,
        start_y,
        height,
    }
}

/// The smallest size [OverflowPolicy::ShrinkToFit] will go down to, whatever minimum is
/// configured
pub const MIN_SHRINK_SIZE: Px = Px(1.0);

/// Lay out wrapped lines on the canvas, resolving vertical overflow according to
/// `policy`. `min_size` bounds how far [OverflowPolicy::ShrinkToFit] may reduce the
/// font size; it is never taken below [MIN_SHRINK_SIZE].
pub fn layout_lines(
    lines: &[String],
    face: &FontFace,
    size: Px,
    canvas: CanvasSize,
    spacing: Px,
    policy: OverflowPolicy,
    min_size: Px,
) -> TextBlock {
    let mut block = place_lines(lines, face, size, canvas, spacing);
    if block.height <= canvas.1 {
        return block;
    }

    match policy {
        OverflowPolicy::Overflow => {}
        OverflowPolicy::Clamp => {
            log::warn!(
                "text block is {}px tall on a {}px canvas; clamping to the top edge",
                block.height,
                canvas.1
            );
            let shift = -block.start_y;
            block.start_y = 0;
            for line in block.lines.iter_mut() {
                line.y += shift;
            }
            return block;
        }
        OverflowPolicy::ShrinkToFit => {
            // sizes under one pixel never make the block shorter
            let min_size = min_size.max(MIN_SHRINK_SIZE).min(size);
            let mut size = size;
            while block.height > canvas.1 && size > min_size {
                let next = (size * 0.9).max(min_size);
                if next >= size {
                    break;
                }
                size = next;
                block = place_lines(lines, face, size, canvas, spacing);
            }
            if block.height <= canvas.1 {
                log::debug!("shrunk text to {size}px to fit the canvas");
                return block;
            }
        }
    }

    log::warn!(
        "text block is {}px tall on a {}px canvas and will be cut off",
        block.height,
        canvas.1
    );
    block
}
