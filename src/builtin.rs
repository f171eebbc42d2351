//! A tiny bitmap face compiled into the crate, used whenever no font file can be loaded.
//!
//! Glyphs are 8×8 cells covering printable ASCII (`' '` through `'~'`). Each glyph is
//! eight rows, top to bottom; within a row the least significant bit is the leftmost
//! pixel. Glyphs are scaled up by a whole-number factor derived from the requested
//! font size so that the face remains crisp.

use crate::{Colour, Px, Rect};
use image::RgbImage;

/// Width and height of a glyph cell, in unscaled pixels
pub const CELL: i32 = 8;

/// The built-in bitmap face. It never fails to load and only knows printable ASCII;
/// anything else is drawn as `?`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BuiltinFont;

impl BuiltinFont {
    /// The whole-number factor cells are scaled by for the given font size
    pub fn scale(&self, size: Px) -> i32 {
        ((size.0 / CELL as f32).round() as i32).max(1)
    }

    /// Every cell is one full line tall, there is no extra leading
    pub fn line_height(&self, size: Px) -> Px {
        Px((CELL * self.scale(size)) as f32)
    }

    fn glyph(ch: char) -> &'static [u8; 8] {
        let index = match ch {
            ' '..='~' => ch as usize - ' ' as usize,
            _ => '?' as usize - ' ' as usize,
        };
        &GLYPHS[index]
    }

    /// The ink box of a single unscaled glyph, relative to the top-left of its cell
    fn glyph_ink(glyph: &[u8; 8]) -> Rect {
        let mut ink = Rect::default();
        for (row, bits) in glyph.iter().enumerate() {
            if *bits == 0 {
                continue;
            }
            let first = bits.trailing_zeros() as i32;
            let last = 7 - bits.leading_zeros() as i32;
            ink = ink.union(&Rect::new(first, row as i32, last + 1, row as i32 + 1));
        }
        ink
    }

    /// The box covered by the ink of `text`, relative to the pen origin
    pub fn ink_box(&self, text: &str, size: Px) -> Rect {
        let scale = self.scale(size);
        text.chars()
            .filter(|ch| !ch.is_control())
            .enumerate()
            .map(|(i, ch)| {
                let ink = Self::glyph_ink(Self::glyph(ch));
                Rect::new(ink.x1 * scale, ink.y1 * scale, ink.x2 * scale, ink.y2 * scale)
                    .translate(i as i32 * CELL * scale, 0)
            })
            .fold(Rect::default(), |acc, ink| acc.union(&ink))
    }

    /// Draw `text` onto `canvas` with its pen origin at `pen`. Pixels falling outside of
    /// the canvas are dropped.
    pub fn draw(&self, text: &str, size: Px, pen: (i32, i32), colour: Colour, canvas: &mut RgbImage) {
        let scale = self.scale(size);
        let (width, height) = canvas.dimensions();
        let rgb: image::Rgb<u8> = colour.into();

        let chars = text.chars().filter(|ch| !ch.is_control());
        for (i, ch) in chars.enumerate() {
            let origin_x = pen.0 + i as i32 * CELL * scale;
            for (row, bits) in Self::glyph(ch).iter().enumerate() {
                for col in 0..CELL {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let x0 = origin_x + col * scale;
                    let y0 = pen.1 + row as i32 * scale;
                    for y in y0.max(0)..(y0 + scale).min(height as i32) {
                        for x in x0.max(0)..(x0 + scale).min(width as i32) {
                            canvas.put_pixel(x as u32, y as u32, rgb);
                        }
                    }
                }
            }
        }
    }
}

#[rustfmt::skip]
static GLYPHS: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // #
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // $
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // %
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // (
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // *
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ,
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // .
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // /
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ;
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // <
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // =
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // >
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // ?
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // @
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // A
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // B
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // C
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // D
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // E
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // F
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // G
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // H
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // J
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // K
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // L
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // M
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // N
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // O
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // P
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // Q
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // R
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // S
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // Y
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // Z
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // [
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // \
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ]
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // a
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // b
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // c
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // d
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // e
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // f
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // g
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // h
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // j
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // k
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // l
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // m
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // n
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // o
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // p
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // q
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // r
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // s
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // v
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // w
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // y
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // z
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // }
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_tracks_font_size() {
        let font = BuiltinFont;
        assert_eq!(font.scale(Px(8.0)), 1);
        assert_eq!(font.scale(Px(70.0)), 9);
        assert_eq!(font.scale(Px(2.0)), 1);
        assert_eq!(font.line_height(Px(16.0)), Px(16.0));
    }

    #[test]
    fn ink_box_of_single_glyph() {
        // 'A' occupies columns 0..6 and rows 0..7 of its cell
        let ink = BuiltinFont.ink_box("A", Px(8.0));
        assert_eq!(ink, Rect::new(0, 0, 6, 7));

        let ink = BuiltinFont.ink_box("A", Px(16.0));
        assert_eq!(ink, Rect::new(0, 0, 12, 14));
    }

    #[test]
    fn ink_box_spans_words() {
        let ink = BuiltinFont.ink_box("A A", Px(8.0));
        assert_eq!(ink, Rect::new(0, 0, 16 + 6, 7));
        assert!(BuiltinFont.ink_box("   ", Px(8.0)).is_empty());
    }

    #[test]
    fn non_ascii_draws_as_question_mark() {
        assert_eq!(
            BuiltinFont.ink_box("é", Px(8.0)),
            BuiltinFont.ink_box("?", Px(8.0))
        );
    }

    #[test]
    fn draw_clips_to_canvas() {
        let mut canvas = RgbImage::new(4, 4);
        BuiltinFont.draw("H", Px(8.0), (-2, -2), Colour::new_rgb_bytes(255, 0, 0), &mut canvas);
        // row 2 of 'H' is 0x33: columns 0, 1, 4 and 5 lit, shifted left by two
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(2, 0).0, [255, 0, 0]);
        assert_eq!(canvas.get_pixel(3, 0).0, [255, 0, 0]);
    }
}
