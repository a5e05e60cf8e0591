//! Unit tests for cc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ShipId, TargetId};

    #[test]
    fn index_roundtrip() {
        let id = ShipId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ShipId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(TargetId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TargetId(3).to_string(), "TargetId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Position, heading_deg};

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.delta_to(b), (3.0, 4.0));
    }

    #[test]
    fn heading_points_nose_up() {
        // +x (east) → 90°, +y (down the screen) → 180°, -y (up) → 0°.
        assert!((heading_deg(10.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((heading_deg(0.0, 5.0) - 180.0).abs() < 1e-9);
        assert!(heading_deg(0.0, -5.0).abs() < 1e-9);
        assert!((heading_deg(-1.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn heading_always_in_range() {
        for i in 0..360 {
            let rad = (i as f64).to_radians();
            let h = heading_deg(rad.cos(), rad.sin());
            assert!((0.0..360.0).contains(&h), "heading {h} out of range for {i}°");
        }
        let h = heading_deg(-1e-18, -1.0);
        assert!((0.0..360.0).contains(&h));
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Position::new(f64::NAN, 1.0).is_finite());
        assert!(Position::new(1.0, 1.0).is_finite());
    }
}

#[cfg(test)]
mod time {
    use crate::{Calendar, Month};

    #[test]
    fn month_wraps() {
        assert_eq!(Month::from_index(12), Month::January);
        assert_eq!(Month::December.offset(1), Month::January);
        assert_eq!(Month::November.offset(14), Month::January);
    }

    #[test]
    fn month_parses_case_insensitively() {
        assert_eq!(" march ".parse::<Month>().unwrap(), Month::March);
        assert_eq!("DECEMBER".parse::<Month>().unwrap(), Month::December);
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn december_advances_to_january() {
        let mut cal = Calendar::new(Month::December, 2);
        assert_eq!(cal.advance(), Month::January);
        assert_eq!(cal.turn(), 1);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut cal = Calendar::default();
        for _ in 0..12 {
            cal.advance();
        }
        assert_eq!(cal.current(), Month::January);
        assert_eq!(cal.turn(), 12);
    }

    #[test]
    fn future_and_planning_month() {
        let cal = Calendar::new(Month::November, 2);
        assert_eq!(cal.future(0), Month::November);
        assert_eq!(cal.future(3), Month::February);
        assert_eq!(cal.planning_month(), Month::January);
    }
}

#[cfg(test)]
mod config {
    use crate::{NavParams, Retention, TurnConfig};

    #[test]
    fn defaults_match_documented_constants() {
        let p = NavParams::default();
        assert_eq!(p.speed, 2.0);
        assert_eq!(p.arrival_offset, 0.0);
        assert_eq!(p.avoidance_distance, 15.0);
        assert_eq!(p.avoidance_force, 10.0);
        assert_eq!(p.exclusion_scale, 0.375);
        assert!(p.validate().is_ok());
        assert!(TurnConfig::default().validate().is_ok());
    }

    #[test]
    fn non_finite_speed_rejected() {
        let p = NavParams { speed: f64::NAN, ..NavParams::default() };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn negative_offset_rejected() {
        let p = NavParams { arrival_offset: -1.0, ..NavParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_day_month_rejected() {
        let c = TurnConfig { days_per_month: 0, ..TurnConfig::default() };
        assert!(c.validate().is_err());
        let c = TurnConfig { retention: Retention::LastMonths(0), ..TurnConfig::default() };
        assert!(c.validate().is_err());
    }
}
