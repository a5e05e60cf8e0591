//! `Navigator`: applies `compute_step` to resolved ships.

use cc_core::NavParams;
use cc_fleet::{Roster, Ship};
use cc_spatial::{Obstacle, ObstacleField};

use crate::{NavResult, NavStep, compute_step};

/// Movement tunables plus the obstacle field they were indexed with.
///
/// The field is always built from `params.avoidance_distance`, so the
/// R-tree prefilter and the exact influence test in `compute_step` agree.
pub struct Navigator {
    params: NavParams,
    field:  ObstacleField,
}

impl Navigator {
    /// Validate `params` and index `obstacles`.
    pub fn new(params: NavParams, obstacles: Vec<Obstacle>) -> NavResult<Self> {
        params.validate()?;
        let field = ObstacleField::new(obstacles, params.avoidance_distance)?;
        Ok(Self { params, field })
    }

    /// One exclusion zone per island of `roster`.
    pub fn for_roster(roster: &Roster, params: NavParams) -> NavResult<Self> {
        params.validate()?;
        let field = ObstacleField::from_roster(roster, &params)?;
        Ok(Self { params, field })
    }

    pub fn params(&self) -> &NavParams {
        &self.params
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    /// Compute the step for `ship` without modifying it.
    ///
    /// Idle ships and ships whose destination is not in `roster` get an
    /// unchanged step.  The exclusion zone of the destination island itself
    /// is ignored so ships can reach its berth.
    pub fn plan_step(&self, ship: &Ship, roster: &Roster) -> NavStep {
        let target = ship.destination.and_then(|id| roster.arrival_point(id));
        let obstacles = self
            .field
            .influencing(ship.position)
            .into_iter()
            .filter(|o| o.owner.is_none() || o.owner != ship.destination);
        compute_step(ship.position, ship.heading, target, &self.params, obstacles)
    }

    /// A copy of `ship` advanced by one step.
    pub fn step_ship(&self, ship: &Ship, roster: &Roster) -> Ship {
        let step = self.plan_step(ship, roster);
        Ship {
            position: step.position,
            heading: step.heading,
            ..ship.clone()
        }
    }
}
