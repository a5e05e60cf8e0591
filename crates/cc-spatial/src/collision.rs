//! Point-in-island checks.
//!
//! Islands are treated as axis-aligned ellipses whose diameters are the
//! island size inflated by [`COLLISION_BUFFER`].  These checks only report;
//! nothing in the core blocks movement based on them.

use cc_core::{Position, TargetId};
use cc_fleet::Target;

/// Islands are checked against a footprint 10 % larger than their size.
pub const COLLISION_BUFFER: f64 = 1.1;

/// `true` if `point` lies inside (or on) the ellipse centred at `center`
/// with full `width` and `height`.  Degenerate ellipses contain nothing.
pub fn is_point_inside_ellipse(point: Position, center: Position, width: f64, height: f64) -> bool {
    if !(width > 0.0 && height > 0.0) {
        return false;
    }
    let nx = (point.x - center.x) / (width / 2.0);
    let ny = (point.y - center.y) / (height / 2.0);
    nx * nx + ny * ny <= 1.0
}

/// The first island whose buffered footprint contains `point`.
pub fn colliding_island<'a, I>(point: Position, islands: I) -> Option<TargetId>
where
    I: IntoIterator<Item = &'a Target>,
{
    islands
        .into_iter()
        .filter(|t| t.is_island())
        .find(|t| {
            let d = t.size * COLLISION_BUFFER;
            is_point_inside_ellipse(point, t.position, d, d)
        })
        .map(|t| t.id)
}

/// `true` if `point` lies inside any island's buffered footprint.
pub fn check_collision<'a, I>(point: Position, islands: I) -> bool
where
    I: IntoIterator<Item = &'a Target>,
{
    colliding_island(point, islands).is_some()
}
