use image::Rgb;
use serde::{Deserialize, Serialize};

/// An opaque colour in the 8-bit sRGB space. Serialises as `[r, g, b]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour, r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Mix `other` over this colour with the given coverage (0.0 keeps this colour,
    /// 1.0 yields `other`)
    pub fn blend(self, other: Colour, coverage: f32) -> Colour {
        let coverage = coverage.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            (a as f32 + (b as f32 - a as f32) * coverage)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Colour {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<Colour> for [u8; 3] {
    fn from(c: Colour) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<Colour> for Rgb<u8> {
    fn from(c: Colour) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

impl From<Rgb<u8>> for Colour {
    fn from(c: Rgb<u8>) -> Self {
        let Rgb([r, g, b]) = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// A list of pre-defined colour constants, including the explainer palette
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb_bytes(0, 0, 0);
    pub const WHITE: Colour = Colour::new_rgb_bytes(255, 255, 255);
    /// Near-black blue used as the default slide background
    pub const MIDNIGHT: Colour = Colour::new_rgb_bytes(20, 20, 30);
    pub const TRUST_GREEN: Colour = Colour::new_rgb_bytes(0, 100, 0);
    pub const WARNING_RED: Colour = Colour::new_rgb_bytes(50, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let bg = colours::MIDNIGHT;
        assert_eq!(bg.blend(colours::WHITE, 0.0), bg);
        assert_eq!(bg.blend(colours::WHITE, 1.0), colours::WHITE);
        assert_eq!(
            colours::BLACK.blend(colours::WHITE, 0.5),
            Colour::new_rgb_bytes(128, 128, 128)
        );
    }

    #[test]
    fn deserialises_from_array() {
        let c: Colour = serde_json::from_str("[0, 100, 0]").expect("valid colour");
        assert_eq!(c, colours::TRUST_GREEN);
        assert_eq!(serde_json::to_string(&c).expect("serialises"), "[0,100,0]");
    }
}
