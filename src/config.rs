use crate::canvas::{CanvasSize, HD_720};
use crate::colour::{colours, Colour};
use crate::font::FontFace;
use crate::layout::OverflowPolicy;
use crate::slide::SlideSpec;
use crate::units::Px;
use crate::SlideError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CANVAS: CanvasSize = HD_720;
pub const DEFAULT_TEXT_COLOUR: Colour = colours::WHITE;
pub const DEFAULT_BACKGROUND: Colour = colours::MIDNIGHT;
pub const DEFAULT_FONT_SIZE: Px = Px(70.0);
pub const DEFAULT_MIN_FONT_SIZE: Px = Px(12.0);
pub const DEFAULT_WRAP_WIDTH: usize = 20;
pub const DEFAULT_LINE_SPACING: Px = Px(10.0);
pub const DEFAULT_FPS: u32 = 24;
/// Seconds of silence kept after the narration of each slide
pub const DEFAULT_NARRATION_PADDING: f32 = 0.5;

fn default_fallback_fonts() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
        PathBuf::from("arial.ttf"),
    ]
}

/// Settings shared by every slide of a render. Passed explicitly to the render
/// functions, so several renders with different settings can run side by side.
///
/// Every field has a default, so a configuration file only needs to name what it
/// changes:
///
/// ```
/// use slide_gen::{OverflowPolicy, RenderConfig};
///
/// let config = RenderConfig::from_json(r#"{ "canvas": [1920, 1080], "overflow": "clamp" }"#)
///     .expect("valid config");
/// assert_eq!(config.canvas, (1920, 1080));
/// assert_eq!(config.overflow, OverflowPolicy::Clamp);
/// assert_eq!(config.wrap_width, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas: CanvasSize,
    pub text_colour: Colour,
    /// Background for slides that don't choose their own
    pub background: Colour,
    pub font_size: Px,
    pub min_font_size: Px,
    pub wrap_width: usize,
    pub line_spacing: Px,
    pub overflow: OverflowPolicy,
    /// Font file to draw with; if it can't be loaded the fallbacks are tried in order
    /// and then the built-in font
    pub font_path: Option<PathBuf>,
    pub fallback_fonts: Vec<PathBuf>,
    pub fps: u32,
    pub narration_padding: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            canvas: DEFAULT_CANVAS,
            text_colour: DEFAULT_TEXT_COLOUR,
            background: DEFAULT_BACKGROUND,
            font_size: DEFAULT_FONT_SIZE,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            wrap_width: DEFAULT_WRAP_WIDTH,
            line_spacing: DEFAULT_LINE_SPACING,
            overflow: OverflowPolicy::default(),
            font_path: None,
            fallback_fonts: default_fallback_fonts(),
            fps: DEFAULT_FPS,
            narration_padding: DEFAULT_NARRATION_PADDING,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<RenderConfig, SlideError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RenderConfig, SlideError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Resolve the configured font, falling back as described on [FontFace::resolve]
    pub fn resolve_font(&self) -> FontFace {
        FontFace::resolve(self.font_path.as_deref(), &self.fallback_fonts)
    }

    /// Build the spec for a slide showing `text` with these settings. `background`
    /// overrides the configured background colour.
    pub fn slide_spec<S: Into<String>>(&self, text: S, background: Option<Colour>) -> SlideSpec {
        SlideSpec::new(text)
            .with_canvas(self.canvas)
            .with_background(background.unwrap_or(self.background))
            .with_foreground(self.text_colour)
            .with_font_size(self.font_size)
            .with_wrap_width(self.wrap_width)
            .with_line_spacing(self.line_spacing)
            .with_overflow(self.overflow, self.min_font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_explainer_look() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas, (1280, 720));
        assert_eq!(config.font_size, Px(70.0));
        assert_eq!(config.text_colour, colours::WHITE);
        assert_eq!(config.fps, 24);
        assert_eq!(config.fallback_fonts.len(), 2);
    }

    #[test]
    fn empty_json_is_default() {
        let config = RenderConfig::from_json("{}").expect("empty config parses");
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RenderConfig::from_json("{ canvas: ").expect_err("should not parse");
        assert!(matches!(err, SlideError::Json(_)));
    }

    #[test]
    fn slide_spec_uses_config_and_override() {
        let config = RenderConfig {
            wrap_width: 12,
            font_size: Px(40.0),
            ..Default::default()
        };
        let spec = config.slide_spec("Get Verified Today.", Some(colours::TRUST_GREEN));
        assert_eq!(spec.wrap_width, 12);
        assert_eq!(spec.font_size, Px(40.0));
        assert_eq!(spec.background, colours::TRUST_GREEN);
        assert_eq!(spec.foreground, colours::WHITE);

        let spec = config.slide_spec("Control Your Reputation.", None);
        assert_eq!(spec.background, colours::MIDNIGHT);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "font_size": 48, "font_path": "missing.ttf", "fallback_fonts": [] }"#)
            .expect("can write config");
        let config = RenderConfig::load(&path).expect("config loads");
        assert_eq!(config.font_size, Px(48.0));
        assert!(config.resolve_font().is_builtin());
    }
}
