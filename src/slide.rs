use crate::canvas::CanvasSize;
use crate::colour::Colour;
use crate::config::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS, DEFAULT_FONT_SIZE, DEFAULT_LINE_SPACING,
    DEFAULT_MIN_FONT_SIZE, DEFAULT_TEXT_COLOUR, DEFAULT_WRAP_WIDTH,
};
use crate::layout::OverflowPolicy;
use crate::units::Px;

/// Everything needed to lay out and draw a single slide, apart from the font face.
///
/// Specs are cheap to build and are consumed by [layout](crate::render::layout) and
/// [render_slide](crate::render::render_slide). Start from [SlideSpec::new] and adjust with the
/// `with_*` methods:
///
/// ```
/// use slide_gen::{colours, SlideSpec, Px};
///
/// let spec = SlideSpec::new("Naija Trust = Verified.")
///     .with_background(colours::TRUST_GREEN)
///     .with_font_size(Px(60.0));
/// assert_eq!(spec.canvas, (1280, 720));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    pub text: String,
    pub canvas: CanvasSize,
    pub background: Colour,
    pub foreground: Colour,
    pub font_size: Px,
    /// Greedy word-wrap budget, in characters
    pub wrap_width: usize,
    pub line_spacing: Px,
    pub overflow: OverflowPolicy,
    /// Smallest size [OverflowPolicy::ShrinkToFit] may reduce the font to
    pub min_font_size: Px,
}

impl SlideSpec {
    /// A slide showing `text` with the default explainer look: white 70px text on a
    /// dark background, wrapped at 20 characters on a 1280×720 canvas
    pub fn new<S: Into<String>>(text: S) -> SlideSpec {
        SlideSpec {
            text: text.into(),
            canvas: DEFAULT_CANVAS,
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_TEXT_COLOUR,
            font_size: DEFAULT_FONT_SIZE,
            wrap_width: DEFAULT_WRAP_WIDTH,
            line_spacing: DEFAULT_LINE_SPACING,
            overflow: OverflowPolicy::default(),
            min_font_size: DEFAULT_MIN_FONT_SIZE,
        }
    }

    pub fn with_canvas(self, canvas: CanvasSize) -> SlideSpec {
        SlideSpec { canvas, ..self }
    }

    pub fn with_background<C: Into<Colour>>(self, background: C) -> SlideSpec {
        SlideSpec {
            background: background.into(),
            ..self
        }
    }

    pub fn with_foreground<C: Into<Colour>>(self, foreground: C) -> SlideSpec {
        SlideSpec {
            foreground: foreground.into(),
            ..self
        }
    }

    pub fn with_font_size(self, font_size: Px) -> SlideSpec {
        SlideSpec { font_size, ..self }
    }

    pub fn with_wrap_width(self, wrap_width: usize) -> SlideSpec {
        SlideSpec { wrap_width, ..self }
    }

    pub fn with_line_spacing(self, line_spacing: Px) -> SlideSpec {
        SlideSpec {
            line_spacing,
            ..self
        }
    }

    pub fn with_overflow(self, overflow: OverflowPolicy, min_font_size: Px) -> SlideSpec {
        SlideSpec {
            overflow,
            min_font_size,
            ..self
        }
    }
}
