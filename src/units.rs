use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// A distance in canvas pixels. Fractional values are allowed; they are only rounded
/// when glyphs are finally rasterised onto the canvas.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Display,
    From,
    Into,
    Sum,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Px(pub f32);

impl Px {
    /// Round to the nearest whole pixel
    pub fn round(self) -> i32 {
        self.0.round() as i32
    }

    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_arithmetic() {
        let a = Px(70.0);
        assert_eq!(a * 0.5, Px(35.0));
        assert_eq!(a / 7.0, Px(10.0));
        assert_eq!(a - Px(20.0), Px(50.0));
        assert_eq!(Px(10.4).round(), 10);
        let total: Px = [Px(1.0), Px(2.5)].into_iter().sum();
        assert_eq!(total, Px(3.5));
    }
}
