//! Read-only day state passed to every hook.

use cc_core::Month;
use cc_fleet::{Roster, Ship};
use serde_json::Value;

/// One simulated day as seen by a [`PortOperations`][crate::PortOperations]
/// implementation.
pub struct DayContext<'a> {
    pub month: Month,

    /// Calendar turn the month is executed in.
    pub turn: u64,

    /// 1-based day of the month.
    pub day: u32,

    /// Decisions planned for `month`, or `{}`.
    pub decisions: &'a Value,

    /// Ship roster after today's movement step.
    pub ships: &'a [Ship],

    pub roster: &'a Roster,
}

impl<'a> DayContext<'a> {
    #[inline]
    pub fn new(
        month:     Month,
        turn:      u64,
        day:       u32,
        decisions: &'a Value,
        ships:     &'a [Ship],
        roster:    &'a Roster,
    ) -> Self {
        Self { month, turn, day, decisions, ships, roster }
    }

    /// Ships that currently have a resolved destination.
    pub fn underway(&self) -> impl Iterator<Item = &'a Ship> + 'a {
        self.ships.iter().filter(|s| !s.is_stationary())
    }
}
