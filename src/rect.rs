/// An axis-aligned box in canvas pixels, specified by two opposite corners. `(x1, y1)`
/// is the top-left corner and `(x2, y2)` the exclusive bottom-right corner, with y
/// growing downwards as it does in the rendered image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> u32 {
        (self.x2 - self.x1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y2 - self.y1).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The smallest rectangle containing both rectangles. Empty rectangles do not
    /// contribute to the union.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

impl From<ab_glyph::Rect> for Rect {
    fn from(r: ab_glyph::Rect) -> Self {
        Rect {
            x1: r.min.x.floor() as i32,
            y1: r.min.y.floor() as i32,
            x2: r.max.x.ceil() as i32,
            y2: r.max.y.ceil() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_skips_empty() {
        let a = Rect::new(2, 3, 6, 10);
        assert_eq!(a.union(&Rect::default()), a);
        assert_eq!(Rect::default().union(&a), a);
        let b = Rect::new(-1, 5, 4, 12);
        assert_eq!(a.union(&b), Rect::new(-1, 3, 6, 12));
        assert_eq!(a.union(&b).width(), 7);
        assert_eq!(a.union(&b).height(), 9);
    }
}
