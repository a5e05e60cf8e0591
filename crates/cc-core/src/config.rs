//! Simulation tunables.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to the scheduler builder.  Every struct has a
//! `validate` method; builders call it so malformed values fail fast with
//! [`CcError::Config`] rather than surfacing later as NaN coordinates.

use crate::{CcError, CcResult, DAYS_PER_MONTH, Month};

/// Map units a ship advances per simulated day.
pub const DEFAULT_SPEED: f64 = 2.0;

/// Margin added to an exclusion radius before avoidance kicks in.
pub const AVOIDANCE_DISTANCE: f64 = 15.0;

/// Upper bound on the lateral correction applied per obstacle per step.
pub const AVOIDANCE_FORCE: f64 = 10.0;

/// Exclusion radius as a fraction of island size (75 % of the diameter, halved).
pub const EXCLUSION_SCALE: f64 = 0.375;

// ── NavParams ─────────────────────────────────────────────────────────────────

/// Movement and avoidance tunables for the navigator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavParams {
    /// Distance covered per step, in map units.  Default: 2.
    pub speed: f64,

    /// How far short of the arrival point a ship stops.  0 lands exactly on it.
    pub arrival_offset: f64,

    /// Extra margin around each exclusion radius inside which avoidance applies.
    pub avoidance_distance: f64,

    /// Cap on the lateral correction contributed by one obstacle.
    pub avoidance_force: f64,

    /// Island exclusion radius = `exclusion_scale * size`.
    pub exclusion_scale: f64,
}

impl Default for NavParams {
    fn default() -> Self {
        Self {
            speed:              DEFAULT_SPEED,
            arrival_offset:     0.0,
            avoidance_distance: AVOIDANCE_DISTANCE,
            avoidance_force:    AVOIDANCE_FORCE,
            exclusion_scale:    EXCLUSION_SCALE,
        }
    }
}

impl NavParams {
    /// All tunables must be finite and non-negative.
    pub fn validate(&self) -> CcResult<()> {
        let fields = [
            ("speed", self.speed),
            ("arrival_offset", self.arrival_offset),
            ("avoidance_distance", self.avoidance_distance),
            ("avoidance_force", self.avoidance_force),
            ("exclusion_scale", self.exclusion_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CcError::Config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

// ── Retention ─────────────────────────────────────────────────────────────────

/// How much of the daily log the scheduler keeps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Retention {
    /// Keep every record for the lifetime of the run.
    #[default]
    Unbounded,
    /// Keep only the most recent `n` executed months.
    LastMonths(usize),
}

// ── TurnConfig ────────────────────────────────────────────────────────────────

/// Calendar and logging configuration for the turn scheduler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TurnConfig {
    /// Month the calendar shows before the first advance.
    pub start_month: Month,

    /// Months ahead of the current month presented as "plan for this next".
    pub planning_horizon: u32,

    /// Days executed per month.  Default: 30.
    pub days_per_month: u32,

    /// Daily log retention policy.
    pub retention: Retention,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            start_month:      Month::January,
            planning_horizon: 2,
            days_per_month:   DAYS_PER_MONTH,
            retention:        Retention::Unbounded,
        }
    }
}

impl TurnConfig {
    pub fn validate(&self) -> CcResult<()> {
        if self.days_per_month == 0 {
            return Err(CcError::Config("days_per_month must be at least 1".to_owned()));
        }
        if self.retention == Retention::LastMonths(0) {
            return Err(CcError::Config(
                "retention must keep at least one month".to_owned(),
            ));
        }
        Ok(())
    }
}
