//! Planar map coordinates and heading math.
//!
//! The map is a normalized `[0, 100]²` space (percent of the viewport) with
//! `y` growing downwards, so a heading of 0° points "up" the screen.  All
//! arithmetic is `f64`; the map is tiny, precision is never the bottleneck.

/// A point on the map.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector `(dx, dy)` from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Position) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance in map units.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        let (dx, dy) = self.delta_to(other);
        dx.hypot(dy)
    }

    /// `self + (dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Sprite heading in degrees for a direction vector `(dx, dy)`.
///
/// `atan2` measures from the +x axis; sprites are drawn nose-up, hence the
/// +90° rotation.  The result is wrapped into `[0, 360)`.
pub fn heading_deg(dx: f64, dy: f64) -> f64 {
    let deg = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0.
    if deg >= 360.0 { 0.0 } else { deg }
}
