//! Unit tests for cc-nav.

use cc_core::{NavParams, Position, TargetId};
use cc_fleet::{DockingPoint, RosterBuilder, ShipSpec, TargetSpec};
use cc_spatial::Obstacle;

use crate::{Navigator, compute_step};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn params(speed: f64, arrival_offset: f64) -> NavParams {
    NavParams { speed, arrival_offset, ..NavParams::default() }
}

fn no_obstacles() -> Vec<Obstacle> {
    Vec::new()
}

// ── compute_step ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn cruise_straight_east() {
        let step = compute_step(
            Position::new(0.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &no_obstacles(),
        );
        assert!((step.position.x - 2.0).abs() < EPS);
        assert!(step.position.y.abs() < EPS);
        assert!((step.heading - 90.0).abs() < EPS);
        assert!(!step.arrived);
    }

    #[test]
    fn arrival_snaps_exactly_onto_target() {
        let step = compute_step(
            Position::new(9.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &no_obstacles(),
        );
        assert_eq!(step.position, Position::new(10.0, 0.0));
        assert!(step.arrived);
    }

    #[test]
    fn arrival_stops_offset_short() {
        // distance 5 < speed 2 + offset 4 → stop 4 units before (10, 0).
        let step = compute_step(
            Position::new(5.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 4.0), &no_obstacles(),
        );
        assert!((step.position.x - 6.0).abs() < EPS);
        assert!(step.position.y.abs() < EPS);
        assert!(step.arrived);
    }

    #[test]
    fn missing_target_is_passthrough() {
        let start = Position::new(3.0, 4.0);
        let step = compute_step(start, 123.0, None, &params(2.0, 0.0), &no_obstacles());
        assert_eq!(step.position, start);
        assert_eq!(step.heading, 123.0);
    }

    #[test]
    fn zero_distance_keeps_prior_heading() {
        let here = Position::new(10.0, 10.0);
        let step = compute_step(here, 45.0, Some(here), &params(2.0, 0.0), &no_obstacles());
        assert_eq!(step.position, here);
        assert_eq!(step.heading, 45.0);
        assert!(!step.arrived);
    }

    #[test]
    fn non_finite_distance_is_passthrough() {
        let here = Position::new(10.0, 10.0);
        let step = compute_step(
            here, 45.0, Some(Position::new(f64::NAN, 0.0)), &params(2.0, 0.0), &no_obstacles(),
        );
        assert_eq!(step.position, here);
        assert_eq!(step.heading, 45.0);
    }

    #[test]
    fn heading_in_range_for_all_directions() {
        let origin = Position::new(50.0, 50.0);
        for i in 0..72 {
            let rad = (i as f64 * 5.0).to_radians();
            let target = Position::new(50.0 + 20.0 * rad.cos(), 50.0 + 20.0 * rad.sin());
            let step = compute_step(origin, 0.0, Some(target), &params(2.0, 0.0), &no_obstacles());
            assert!((0.0..360.0).contains(&step.heading), "heading {} at {}°", step.heading, i * 5);
        }
    }

    #[test]
    fn obstacle_deflects_laterally() {
        let zone = [Obstacle::new(Position::new(5.0, 0.0), 3.0)];
        let step = compute_step(
            Position::new(0.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &zone,
        );
        assert!(step.position.y.abs() > 1e-6, "expected lateral deviation, got {}", step.position);
        assert!((step.position.x - 2.0).abs() < EPS);
        // force = 10 * (1 - 5/18)
        assert!((step.position.y.abs() - 10.0 * (1.0 - 5.0 / 18.0)).abs() < EPS);
    }

    #[test]
    fn push_is_away_from_off_axis_obstacle() {
        // Obstacle slightly below the path (+y is down): ship is pushed up (-y).
        let zone = [Obstacle::new(Position::new(5.0, 1.0), 3.0)];
        let step = compute_step(
            Position::new(0.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &zone,
        );
        assert!(step.position.y < 0.0);

        let zone = [Obstacle::new(Position::new(5.0, -1.0), 3.0)];
        let step = compute_step(
            Position::new(0.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &zone,
        );
        assert!(step.position.y > 0.0);
    }

    #[test]
    fn out_of_range_obstacle_ignored() {
        let zone = [Obstacle::new(Position::new(60.0, 0.0), 3.0)];
        let step = compute_step(
            Position::new(0.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &zone,
        );
        assert_eq!(step.position, Position::new(2.0, 0.0));
    }

    #[test]
    fn overlapping_zones_accumulate() {
        let one = [Obstacle::new(Position::new(5.0, 0.0), 3.0)];
        let two = [
            Obstacle::new(Position::new(5.0, 0.0), 3.0),
            Obstacle::new(Position::new(5.0, 0.0), 3.0),
        ];
        let start = Position::new(0.0, 0.0);
        let goal = Some(Position::new(10.0, 0.0));
        let single = compute_step(start, 0.0, goal, &params(2.0, 0.0), &one);
        let double = compute_step(start, 0.0, goal, &params(2.0, 0.0), &two);
        assert!((double.position.y - 2.0 * single.position.y).abs() < EPS);
    }

    #[test]
    fn arrival_is_not_deflected() {
        let zone = [Obstacle::new(Position::new(10.0, 1.0), 3.0)];
        let step = compute_step(
            Position::new(9.0, 0.0), 0.0, Some(Position::new(10.0, 0.0)),
            &params(2.0, 0.0), &zone,
        );
        assert_eq!(step.position, Position::new(10.0, 0.0));
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod navigator_tests {
    use super::*;

    #[test]
    fn invalid_params_rejected() {
        let bad = NavParams { avoidance_force: f64::INFINITY, ..NavParams::default() };
        assert!(Navigator::new(bad, vec![]).is_err());
    }

    #[test]
    fn idle_ship_unchanged() {
        let (roster, ships) = RosterBuilder::new()
            .target(TargetSpec::terminal("T", Position::new(10.0, 0.0), 80.0))
            .ship(ShipSpec::new("Idle", Position::new(0.0, 0.0), 70.0))
            .build()
            .unwrap();
        let nav = Navigator::for_roster(&roster, NavParams::default()).unwrap();
        assert_eq!(nav.step_ship(&ships[0], &roster), ships[0]);
    }

    #[test]
    fn ship_heads_for_docking_point() {
        let (roster, ships) = RosterBuilder::new()
            .target(TargetSpec::island("Calnera East", Position::new(10.0, 35.0), 0.0))
            .docking_point(DockingPoint::new("Calnera East Dock", Position::new(30.0, 35.0)))
            .ship(ShipSpec::new("Tanker", Position::new(29.0, 35.0), 0.0).bound_for("Calnera East"))
            .build()
            .unwrap();
        let nav = Navigator::for_roster(&roster, NavParams::default()).unwrap();
        let moved = nav.step_ship(&ships[0], &roster);
        assert_eq!(moved.position, Position::new(30.0, 35.0));
        assert!((moved.heading - 90.0).abs() < EPS);
    }

    #[test]
    fn destination_island_zone_is_ignored() {
        // Small island: its own zone would otherwise push the ship sideways.
        let (roster, ships) = RosterBuilder::new()
            .target(TargetSpec::island("Isle", Position::new(10.0, 0.0), 8.0))
            .ship(ShipSpec::new("Tanker", Position::new(0.0, 0.0), 0.0).bound_for("Isle"))
            .build()
            .unwrap();
        let nav = Navigator::for_roster(&roster, NavParams::default()).unwrap();
        let moved = nav.step_ship(&ships[0], &roster);
        assert_eq!(moved.position, Position::new(2.0, 0.0));
    }

    #[test]
    fn other_island_zone_deflects() {
        let (roster, ships) = RosterBuilder::new()
            .target(TargetSpec::island("Reef", Position::new(5.0, 0.0), 8.0))
            .target(TargetSpec::terminal("Far Terminal", Position::new(40.0, 0.0), 80.0))
            .ship(ShipSpec::new("Tanker", Position::new(0.0, 0.0), 0.0).bound_for("Far Terminal"))
            .build()
            .unwrap();
        let nav = Navigator::for_roster(&roster, NavParams::default()).unwrap();
        assert_eq!(nav.field().obstacles()[0].owner, Some(TargetId(0)));
        let moved = nav.step_ship(&ships[0], &roster);
        assert!(moved.position.y.abs() > 1e-6);
        assert_eq!(moved.name, "Tanker");
        assert_eq!(moved.cargo, ships[0].cargo);
    }
}
