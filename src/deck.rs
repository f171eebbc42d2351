use crate::{
    font::FontFace, image::RenderedImage, render::layout, script::Script, slide::SlideSpec,
    timing::{clip_duration, Timeline},
    SlideError,
};
use id_arena::{Arena, Id};
use std::path::{Path, PathBuf};

/// A slide placed in a deck, referring to one of the deck's fonts
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub spec: SlideSpec,
    pub font: Id<FontFace>,
    /// Text for the narration collaborator; not drawn
    pub narration: String,
    /// Minimum time on screen, in seconds
    pub duration: Option<f32>,
}

#[derive(Default)]
/// A deck stores the fonts and the ordered slides of an explainer, and renders every
/// slide with a call to [Deck::render] or [Deck::write_stills]
pub struct Deck {
    pub fonts: Arena<FontFace>,
    pub slides: Vec<Slide>,
    /// Seconds of silence kept after each narration
    pub narration_padding: f32,
}

impl Deck {
    /// Build a deck from a script. The configured font is resolved once (falling back as
    /// needed) and shared by every slide.
    pub fn from_script(script: &Script) -> Deck {
        let mut deck = Deck {
            narration_padding: script.config.narration_padding,
            ..Default::default()
        };
        let font = deck.add_font(script.config.resolve_font());

        for entry in script.slides.iter() {
            deck.slides.push(Slide {
                spec: entry.spec(&script.config),
                font,
                narration: entry.narration.clone(),
                duration: entry.duration,
            });
        }
        deck
    }

    /// Add a font to the deck. Fonts are stored "globally" within the deck, such that any
    /// slide can refer to it by the returned ID.
    pub fn add_font<F: Into<FontFace>>(&mut self, font: F) -> Id<FontFace> {
        self.fonts.alloc(font.into())
    }

    /// Add a slide to the end of the deck, returning its index
    pub fn add_slide(&mut self, spec: SlideSpec, font: Id<FontFace>) -> usize {
        self.slides.push(Slide {
            spec,
            font,
            narration: String::new(),
            duration: None,
        });
        self.slides.len() - 1
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Render a single slide by its index
    pub fn render_slide(&self, index: usize) -> Result<RenderedImage, SlideError> {
        let slide = self
            .slides
            .get(index)
            .ok_or(SlideError::SlideMissing(index))?;
        let face = self.fonts.get(slide.font).ok_or(SlideError::FontMissing)?;
        Ok(layout(&slide.spec, face))
    }

    /// Render every slide, in order
    pub fn render(&self) -> Result<Vec<RenderedImage>, SlideError> {
        (0..self.slides.len()).map(|i| self.render_slide(i)).collect()
    }

    /// Render every slide and save it as `slide_000.png`, `slide_001.png`, … inside
    /// `dir`, creating the directory if needed. Returns the written paths in slide
    /// order.
    pub fn write_stills<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>, SlideError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut paths = Vec::with_capacity(self.slides.len());
        for index in 0..self.slides.len() {
            let image = self.render_slide(index)?;
            let path = dir.join(format!("slide_{index:03}.png"));
            image.save_png(&path)?;
            log::info!(
                "wrote slide {}/{} to {}",
                index + 1,
                self.slides.len(),
                path.display()
            );
            paths.push(path);
        }
        Ok(paths)
    }

    /// Clip start offsets once narration lengths are known. `audio[i]` is the length in
    /// seconds of slide `i`'s narration; slides past the end of `audio` have none.
    pub fn timeline(&self, audio: &[Option<f32>]) -> Timeline {
        Timeline::from_durations(self.slides.iter().enumerate().map(|(i, slide)| {
            let audio = audio.get(i).copied().flatten();
            clip_duration(slide.duration, audio, self.narration_padding)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builtin::BuiltinFont, colour::colours, RenderConfig};

    fn builtin_script() -> Script {
        let mut script = Script::explainer();
        script.config = RenderConfig {
            font_path: None,
            fallback_fonts: Vec::new(),
            canvas: (320, 180),
            font_size: crate::Px(16.0),
            ..Default::default()
        };
        script
    }

    #[test]
    fn from_script_shares_one_font() {
        let deck = Deck::from_script(&builtin_script());
        assert_eq!(deck.fonts.len(), 1);
        assert_eq!(deck.len(), 7);
        assert!(deck.slides.iter().all(|s| s.font == deck.slides[0].font));
        assert_eq!(deck.slides[2].spec.background, colours::TRUST_GREEN);
    }

    #[test]
    fn renders_every_slide_at_canvas_size() {
        let deck = Deck::from_script(&builtin_script());
        let images = deck.render().expect("renders");
        assert_eq!(images.len(), 7);
        assert!(images.iter().all(|i| i.size() == (320, 180)));
        assert_eq!(images[3].lines().len(), 2);
    }

    #[test]
    fn missing_slide_is_an_error() {
        let mut deck = Deck::default();
        let font = deck.add_font(BuiltinFont);
        deck.add_slide(SlideSpec::new("Claim Free."), font);
        assert!(matches!(
            deck.render_slide(4),
            Err(SlideError::SlideMissing(4))
        ));
    }

    #[test]
    fn timeline_stretches_for_narration() {
        let deck = Deck::from_script(&builtin_script());
        let timeline = deck.timeline(&[Some(6.1), None, Some(1.0)]);
        assert_eq!(timeline.len(), 7);
        assert!((timeline.durations[0] - 6.6).abs() < 1e-5);
        assert_eq!(timeline.durations[1], 4.0);
        assert_eq!(timeline.durations[2], 4.0);
        assert!((timeline.total() - (6.6 + 4.0 + 4.0 + 6.0 + 5.0 + 4.0 + 5.0)).abs() < 1e-4);
    }

    #[test]
    fn writes_numbered_pngs() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let deck = Deck::from_script(&builtin_script());
        let paths = deck.write_stills(dir.path().join("stills")).expect("writes stills");
        assert_eq!(paths.len(), 7);
        assert!(paths[0].ends_with("slide_000.png"));
        assert!(paths[6].ends_with("slide_006.png"));

        let still = image::open(&paths[0]).expect("png decodes").to_rgb8();
        assert_eq!(still.dimensions(), (320, 180));
        assert_eq!(still.get_pixel(0, 0).0, [50, 0, 0]);
    }
}
