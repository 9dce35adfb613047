//=========================================================================
// Widget Geometry
//=========================================================================

//=== Rect ================================================================

/// Axis-aligned rectangle relative to the gump origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns `true` if the point lies inside (right/bottom edges excluded).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        x >= left
            && y >= top
            && x < left + i64::from(self.width)
            && y < top + i64::from(self.height)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = (i64::from(self.x) + i64::from(self.width))
            .max(i64::from(other.x) + i64::from(other.width));
        let bottom = (i64::from(self.y) + i64::from(self.height))
            .max(i64::from(other.y) + i64::from(other.height));
        Rect {
            x: left,
            y: top,
            width: (right - i64::from(left)).clamp(0, i64::from(u32::MAX)) as u32,
            height: (bottom - i64::from(top)).clamp(0, i64::from(u32::MAX)) as u32,
        }
    }
}

impl From<(i32, i32, u32, u32)> for Rect {
    fn from((x, y, width, height): (i32, i32, u32, u32)) -> Self {
        Self::new(x, y, width, height)
    }
}

//=== Geometry ============================================================

/// Either a full rectangle or a position whose size is decided later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    Rect(Rect),
    Point { x: i32, y: i32 },
}

impl Geometry {
    pub fn position(&self) -> (i32, i32) {
        match self {
            Self::Rect(rect) => (rect.x, rect.y),
            Self::Point { x, y } => (*x, *y),
        }
    }

    /// Explicit rect, `None` for point-only geometry.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(rect) => Some(*rect),
            Self::Point { .. } => None,
        }
    }

    /// Same size, new position.
    pub fn moved_to(&self, x: i32, y: i32) -> Self {
        match self {
            Self::Rect(rect) => Self::Rect(Rect { x, y, ..*rect }),
            Self::Point { .. } => Self::Point { x, y },
        }
    }
}

impl From<Rect> for Geometry {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<(i32, i32, u32, u32)> for Geometry {
    fn from(rect: (i32, i32, u32, u32)) -> Self {
        Self::Rect(rect.into())
    }
}

impl From<(i32, i32)> for Geometry {
    fn from((x, y): (i32, i32)) -> Self {
        Self::Point { x, y }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let r = Rect::new(10, 10, 100, 60);
        assert!(r.contains(10, 10));
        assert!(r.contains(109, 69));
        assert!(!r.contains(110, 20));
        assert!(!r.contains(20, 70));
        assert!(!r.contains(9, 20));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        assert!(!Rect::new(0, 0, 0, 0).contains(0, 0));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(-5, 5, 10, 20);
        assert_eq!(a.union(&b), Rect::new(-5, 0, 15, 25));
    }

    #[test]
    fn moved_to_keeps_size() {
        let g = Geometry::from((0, 0, 100, 100));
        assert_eq!(g.moved_to(30, 30), Geometry::from((30, 30, 100, 100)));
        assert_eq!(Geometry::from((1, 2)).moved_to(3, 4), Geometry::Point { x: 3, y: 4 });
    }
}
