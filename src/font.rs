use crate::{builtin::BuiltinFont, layout::LineMetrics, Colour, Px, Rect, SlideError};
use ab_glyph::{point, Font as _, FontVec, Glyph, GlyphId, InvalidFont, PxScale, ScaleFont};
use image::RgbImage;
use owned_ttf_parser::{name_id, Face};
use std::path::{Path, PathBuf};

/// A parsed font object. Fonts can be TTF or OTF fonts, or the first face of a TTC
/// collection.
///
/// The font data is held once, by the [ab_glyph] face that rasterises the outlines.
/// The name table is read from the same bytes with [owned_ttf_parser] when asked for.
pub struct Font {
    raster: FontVec,
    units_per_em: f32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, SlideError> {
        Face::parse(&bytes, 0)?;
        let raster = FontVec::try_from_vec_and_index(bytes, 0)?;
        let units_per_em = raster.units_per_em().ok_or(InvalidFont)?;

        Ok(Font {
            raster,
            units_per_em,
        })
    }

    /// Read and parse a font file from disk
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Font, SlideError> {
        let bytes = std::fs::read(path.as_ref())?;
        Font::load(bytes)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        let face = Face::parse(self.raster.as_slice(), 0).ok()?;
        face.names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.name_entry(name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.name_entry(name_id::FAMILY)
    }

    fn scaling(&self, size: Px) -> f32 {
        size.0 / self.units_per_em
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.raster.ascent_unscaled())
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.raster.descent_unscaled())
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.raster.line_gap_unscaled())
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Px) -> Px {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// The glyph for `ch`, or `None` if the font maps it to `.notdef`
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        let id = self.raster.glyph_id(ch);
        (id.0 != 0).then_some(id.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// The glyph used to draw `ch`: its own glyph if the font has one, otherwise the
    /// replacement character, a question mark, or `.notdef` in that order
    fn glyph_or_replacement(&self, ch: char) -> GlyphId {
        let gid = self
            .glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
            .unwrap_or_default();
        GlyphId(gid)
    }

    /// [ab_glyph] scales by the ascent-to-descent height rather than by the em square, so
    /// convert the em size into that height
    fn px_scale(&self, size: Px) -> PxScale {
        PxScale::from(self.raster.height_unscaled() * self.scaling(size))
    }

    /// Position every glyph of `text` relative to a pen origin at the top-left corner of
    /// the line, i.e. with the baseline sitting one ascent below the origin
    fn positioned_glyphs(&self, text: &str, size: Px) -> Vec<Glyph> {
        let scale = self.px_scale(size);
        let scaled = self.raster.as_scaled(scale);
        let baseline = self.ascent(size).0;

        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            let id = self.glyph_or_replacement(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }
        glyphs
    }

    /// The box covered by the rasterised ink of `text`, relative to the pen origin
    pub fn ink_box(&self, text: &str, size: Px) -> Rect {
        self.positioned_glyphs(text, size)
            .into_iter()
            .filter_map(|glyph| self.raster.outline_glyph(glyph))
            .map(|outlined| Rect::from(outlined.px_bounds()))
            .fold(Rect::default(), |acc, bounds| acc.union(&bounds))
    }

    /// Rasterise `text` onto `canvas` with its pen origin at `pen`. Pixels falling outside
    /// of the canvas are dropped.
    pub fn draw(&self, text: &str, size: Px, pen: (i32, i32), colour: Colour, canvas: &mut RgbImage) {
        let (width, height) = canvas.dimensions();
        for glyph in self.positioned_glyphs(text, size) {
            let Some(outlined) = self.raster.outline_glyph(glyph) else {
                continue;
            };
            let bounds = Rect::from(outlined.px_bounds());
            outlined.draw(|x, y, coverage| {
                let px = pen.0 + bounds.x1 + x as i32;
                let py = pen.1 + bounds.y1 + y as i32;
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                *pixel = Colour::from(*pixel).blend(colour, coverage).into();
            });
        }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name())
            .field("glyphs", &self.raster.glyph_count())
            .finish()
    }
}

/// The face used to draw slide text: either a parsed font file or the built-in bitmap
/// face used when no font file could be loaded
#[derive(Debug)]
pub enum FontFace {
    TrueType(Font),
    Builtin(BuiltinFont),
}

impl FontFace {
    /// Resolve a font, trying the requested path first and then each fallback path in
    /// order. If none of them can be loaded the built-in face is returned, so resolution
    /// never fails; every path that could not be loaded is logged as a warning.
    pub fn resolve(requested: Option<&Path>, fallbacks: &[PathBuf]) -> FontFace {
        let candidates = requested
            .into_iter()
            .chain(fallbacks.iter().map(PathBuf::as_path));

        for path in candidates {
            match Font::load_from_path(path) {
                Ok(font) => {
                    log::debug!(
                        "loaded font {} from {}",
                        font.name().unwrap_or_else(|| "<unnamed>".to_string()),
                        path.display()
                    );
                    return FontFace::TrueType(font);
                }
                Err(e) => {
                    log::warn!("could not load font {}: {e}", path.display());
                }
            }
        }

        log::warn!("no usable font file found, falling back to the built-in font");
        FontFace::Builtin(BuiltinFont)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin(_))
    }

    /// A human readable name for diagnostics
    pub fn name(&self) -> String {
        match self {
            FontFace::TrueType(font) => font.name().unwrap_or_else(|| "<unnamed>".to_string()),
            FontFace::Builtin(_) => "built-in 8x8".to_string(),
        }
    }

    pub fn line_height(&self, size: Px) -> Px {
        match self {
            FontFace::TrueType(font) => font.line_height(size),
            FontFace::Builtin(font) => font.line_height(size),
        }
    }

    /// Measure the ink of a single line of text
    pub fn measure(&self, text: &str, size: Px) -> LineMetrics {
        let ink = match self {
            FontFace::TrueType(font) => font.ink_box(text, size),
            FontFace::Builtin(font) => font.ink_box(text, size),
        };
        LineMetrics::from_ink(text, ink)
    }

    /// Draw a single line of text with its pen origin at `pen`
    pub fn draw(&self, text: &str, size: Px, pen: (i32, i32), colour: Colour, canvas: &mut RgbImage) {
        match self {
            FontFace::TrueType(font) => font.draw(text, size, pen, colour, canvas),
            FontFace::Builtin(font) => font.draw(text, size, pen, colour, canvas),
        }
    }
}

impl From<Font> for FontFace {
    fn from(font: Font) -> Self {
        FontFace::TrueType(font)
    }
}

impl From<BuiltinFont> for FontFace {
    fn from(font: BuiltinFont) -> Self {
        FontFace::Builtin(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let face = FontFace::resolve(
            Some(Path::new("/definitely/not/a/font.ttf")),
            &[PathBuf::from("also-missing.ttf")],
        );
        assert!(face.is_builtin());
    }

    #[test]
    fn garbage_font_data_is_an_error() {
        let err = Font::load(b"not a font".to_vec()).expect_err("garbage should not parse");
        assert!(matches!(
            err,
            SlideError::InvalidFont(_) | SlideError::FaceParsing(_)
        ));
    }

    #[test]
    fn unparseable_file_falls_back() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").expect("can write file");
        let face = FontFace::resolve(Some(path.as_path()), &[]);
        assert!(face.is_builtin());
    }

    #[test]
    fn reads_names_and_glyphs_from_the_loaded_bytes() {
        let bytes = include_bytes!("../assets/DejaVuSans.ttf");
        let font = Font::load(bytes.to_vec()).expect("can load font");
        assert_eq!(font.raster.as_slice(), &bytes[..]);
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans"));
        assert!(font.name().is_some());

        assert!(font.glyph_id('\u{10FFFD}').is_none());
        let replacement = font.replacement_glyph_id().expect("has U+FFFD");
        assert_eq!(font.glyph_or_replacement('\u{10FFFD}'), GlyphId(replacement));
        assert_eq!(font.ascent(Px(2048.0)), Px(font.raster.ascent_unscaled()));
    }
}
