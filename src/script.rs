use crate::colour::{colours, Colour};
use crate::config::RenderConfig;
use crate::slide::SlideSpec;
use crate::timing::clip_duration;
use crate::SlideError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One slide of a script: the text shown on screen, the narration read over it, and
/// how long it should at least be shown for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub text: String,
    #[serde(default)]
    pub narration: String,
    /// Minimum time on screen, in seconds
    #[serde(default)]
    pub duration: Option<f32>,
    /// Overrides the configured background colour
    #[serde(default)]
    pub background: Option<Colour>,
}

impl ScriptEntry {
    pub fn new<S: Into<String>, N: Into<String>>(text: S, narration: N) -> ScriptEntry {
        ScriptEntry {
            text: text.into(),
            narration: narration.into(),
            duration: None,
            background: None,
        }
    }

    pub fn with_duration(self, duration: f32) -> ScriptEntry {
        ScriptEntry {
            duration: Some(duration),
            ..self
        }
    }

    pub fn with_background(self, background: Colour) -> ScriptEntry {
        ScriptEntry {
            background: Some(background),
            ..self
        }
    }

    /// The layout spec for this slide under `config`
    pub fn spec(&self, config: &RenderConfig) -> SlideSpec {
        config.slide_spec(self.text.clone(), self.background)
    }

    /// How long this slide's clip runs once its narration is known to last `audio`
    /// seconds
    pub fn clip_duration(&self, audio: Option<f32>, config: &RenderConfig) -> f32 {
        clip_duration(self.duration, audio, config.narration_padding)
    }
}

/// A whole explainer: shared render settings plus the slides in playback order
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: RenderConfig,
    pub slides: Vec<ScriptEntry>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Script, SlideError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON script file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Script, SlideError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SlideError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The seven-slide Naija Trust explainer, rendered with the default settings
    pub fn explainer() -> Script {
        let slides = vec![
            ScriptEntry::new(
                "Scams. Fake Vendors. Fear.",
                "In Nigeria's digital market, fear is the enemy. What I ordered versus what I got is killing sales.",
            )
            .with_duration(5.0)
            .with_background(colours::WARNING_RED),
            ScriptEntry::new(
                "Trust is the only currency.",
                "But for legitimate businesses, Trust is the only currency that matters.",
            )
            .with_duration(4.0)
            .with_background(colours::MIDNIGHT),
            ScriptEntry::new(
                "Naija Trust = Verified.",
                "Enter Naija Trust. The standard for verification in Nigerian commerce.",
            )
            .with_duration(4.0)
            .with_background(colours::TRUST_GREEN),
            ScriptEntry::new(
                "CAC Registered.\nSEO Optimized.",
                "We verify your CAC registration. We rank you on Google. We give you the green badge that says, I am real.",
            )
            .with_duration(6.0)
            .with_background(colours::MIDNIGHT),
            ScriptEntry::new(
                "Control Your Reputation.",
                "Don't let gossip destroy your brand. Reply to reviews officially. Control your narrative.",
            )
            .with_duration(5.0)
            .with_background(colours::MIDNIGHT),
            ScriptEntry::new(
                "Get Verified Today.",
                "Stop convincing strangers in DMs. Let your badge do the selling.",
            )
            .with_duration(4.0)
            .with_background(colours::TRUST_GREEN),
            ScriptEntry::new(
                "NaijaTrust.com\nClaim Free.",
                "Claim your business profile for free today at Naija Trust dot com.",
            )
            .with_duration(5.0)
            .with_background(colours::MIDNIGHT),
        ];

        Script {
            config: RenderConfig::default(),
            slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explainer_has_seven_slides() {
        let script = Script::explainer();
        assert_eq!(script.slides.len(), 7);
        assert_eq!(script.slides[3].text, "CAC Registered.\nSEO Optimized.");
        assert_eq!(script.slides[0].background, Some(colours::WARNING_RED));
    }

    #[test]
    fn parses_minimal_script() {
        let script = Script::from_json(
            r#"{
                "slides": [
                    { "text": "Get Verified Today." },
                    { "text": "Claim Free.", "duration": 5, "background": [0, 100, 0] }
                ]
            }"#,
        )
        .expect("script parses");
        assert_eq!(script.config, RenderConfig::default());
        assert_eq!(script.slides[0].duration, None);
        assert_eq!(script.slides[0].narration, "");
        assert_eq!(script.slides[1].duration, Some(5.0));
        assert_eq!(script.slides[1].background, Some(colours::TRUST_GREEN));
    }

    #[test]
    fn json_round_trip_keeps_explainer() {
        let script = Script::explainer();
        let json = script.to_json().expect("serialises");
        assert_eq!(Script::from_json(&json).expect("parses"), script);
    }

    #[test]
    fn entry_spec_falls_back_to_config_background() {
        let config = RenderConfig::default();
        let entry = ScriptEntry::new("Trust is the only currency.", "");
        assert_eq!(entry.spec(&config).background, config.background);
        let entry = entry.with_background(colours::TRUST_GREEN);
        assert_eq!(entry.spec(&config).background, colours::TRUST_GREEN);
    }

    #[test]
    fn entry_clip_duration_uses_config_padding() {
        let config = RenderConfig::default();
        let entry = ScriptEntry::new("Get Verified Today.", "").with_duration(4.0);
        assert_eq!(entry.clip_duration(Some(3.0), &config), 4.0);
        assert_eq!(entry.clip_duration(Some(4.0), &config), 4.5);
    }

    #[test]
    fn missing_slides_is_an_error() {
        assert!(Script::from_json("{}").is_err());
    }
}
