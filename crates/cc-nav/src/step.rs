//! The pure per-step movement function.

use cc_core::{NavParams, Position, heading_deg};
use cc_spatial::Obstacle;

/// Result of one navigation step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavStep {
    pub position: Position,
    /// Degrees in `[0, 360)`, 0 = north.  Equal to the input heading when the
    /// ship did not move.
    pub heading:  f64,
    /// `true` if this step snapped the ship onto its arrival point.
    pub arrived:  bool,
}

impl NavStep {
    #[inline]
    fn unchanged(position: Position, heading: f64) -> Self {
        Self { position, heading, arrived: false }
    }
}

/// Advance a ship one step from `current` toward `target`.
///
/// `obstacles` may contain zones that are out of range; only those with
/// `radius + params.avoidance_distance > distance(current, centre)` push.
/// Deterministic, allocation-free, and side-effect-free.
pub fn compute_step<'a, I>(
    current:   Position,
    heading:   f64,
    target:    Option<Position>,
    params:    &NavParams,
    obstacles: I,
) -> NavStep
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let Some(target) = target else {
        return NavStep::unchanged(current, heading);
    };

    let (dx, dy) = current.delta_to(target);
    let distance = dx.hypot(dy);
    if distance == 0.0 || !distance.is_finite() {
        return NavStep::unchanged(current, heading);
    }

    let (ux, uy) = (dx / distance, dy / distance);
    let new_heading = heading_deg(dx, dy);

    // ── Arrival ───────────────────────────────────────────────────────────
    if distance < params.speed + params.arrival_offset {
        let offset = params.arrival_offset;
        return NavStep {
            position: Position::new(target.x - ux * offset, target.y - uy * offset),
            heading:  new_heading,
            arrived:  true,
        };
    }

    // ── Cruise + avoidance ────────────────────────────────────────────────
    let mut next = current.offset(ux * params.speed, uy * params.speed);

    for obstacle in obstacles {
        let (ox, oy) = current.delta_to(obstacle.center);
        let d = ox.hypot(oy);
        let reach = obstacle.radius + params.avoidance_distance;
        if d == 0.0 || d >= reach {
            continue;
        }
        let (bx, by) = (ox / d, oy / d);

        // Push to the side of the path away from the obstacle; head-on
        // approaches take the left-hand normal.
        let cross = ux * by - uy * bx;
        let (nx, ny) = if cross > 0.0 { (by, -bx) } else { (-by, bx) };

        let force = (params.avoidance_force * (1.0 - d / reach)).min(params.avoidance_force);
        next = next.offset(nx * force, ny * force);
    }

    NavStep { position: next, heading: new_heading, arrived: false }
}
