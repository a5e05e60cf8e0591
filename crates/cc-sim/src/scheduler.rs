//! The `TurnScheduler` and its month loop.

use cc_core::{Calendar, Month, TurnConfig};
use cc_fleet::{Roster, Ship};
use cc_nav::Navigator;
use cc_ops::{DayContext, PortOperations};
use cc_schedule::{
    DailyLog, DailyRecord, MonthLog, MonthSummary, PlanningSchedule, aggregate,
};
use cc_spatial::check_collision;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::TurnObserver;

/// Everything `advance_month` hands back to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    /// The month that was just executed.
    pub new_month:    Month,
    /// `new_month` plus the planning horizon: the month to plan next.
    pub future_month: Month,
    /// Ship roster after the last simulated day.
    pub ships:        Vec<Ship>,
    pub summary:      MonthSummary,
}

// ── TurnScheduler ─────────────────────────────────────────────────────────────

/// Owns the calendar, planning schedule, and daily log of one simulation.
///
/// Ships are not stored; the host passes the roster into
/// [`advance_month`][Self::advance_month] and receives the moved roster back.
/// Targets and docking points are fixed in the [`Roster`] given at build
/// time.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct TurnScheduler<P: PortOperations> {
    pub(crate) config:     TurnConfig,
    pub(crate) calendar:   Calendar,
    pub(crate) planning:   PlanningSchedule,
    pub(crate) log:        DailyLog,
    pub(crate) navigator:  Navigator,
    pub(crate) roster:     Roster,
    pub(crate) operations: P,
}

impl<P: PortOperations> TurnScheduler<P> {
    // ── Calendar ──────────────────────────────────────────────────────────

    pub fn current_month(&self) -> Month {
        self.calendar.current()
    }

    /// The month `offset` months after the current one, wrapping mod 12.
    pub fn future_month(&self, offset: u32) -> Month {
        self.calendar.future(offset)
    }

    /// `future_month(planning_horizon)`.
    pub fn planning_month(&self) -> Month {
        self.calendar.planning_month()
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Store `decisions` for `month`.  A later call for the same month
    /// replaces the earlier one.
    pub fn plan_for_month(&mut self, month: Month, decisions: Value) {
        info!(%month, turn = self.calendar.turn(), "plan stored");
        if self.planning.set(month, decisions).is_some() {
            debug!(%month, "previous plan replaced");
        }
    }

    pub fn planning(&self) -> &PlanningSchedule {
        &self.planning
    }

    // ── State access ──────────────────────────────────────────────────────

    pub fn daily_log(&self) -> &DailyLog {
        &self.log
    }

    /// Retained daily records executed under `month`, oldest first.
    pub fn entries_for(&self, month: Month) -> Vec<&DailyRecord> {
        self.log.entries_for(month)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn operations(&self) -> &P {
        &self.operations
    }

    pub fn operations_mut(&mut self) -> &mut P {
        &mut self.operations
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// One navigation step for every ship.  Ships without a destination come
    /// back unchanged.
    pub fn update_ship_positions(&self, ships: &[Ship]) -> Vec<Ship> {
        let navigator = &self.navigator;
        let roster = &self.roster;

        #[cfg(not(feature = "parallel"))]
        {
            ships.iter().map(|s| navigator.step_ship(s, roster)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            ships.par_iter().map(|s| navigator.step_ship(s, roster)).collect()
        }
    }

    // ── Month loop ────────────────────────────────────────────────────────

    /// Advance the calendar one month and simulate every day of it.
    ///
    /// Cannot fail: unresolved destinations were dealt with when the roster
    /// was built, and degenerate geometry leaves ships where they are.
    pub fn advance_month<O: TurnObserver>(
        &mut self,
        ships:    Vec<Ship>,
        observer: &mut O,
    ) -> TurnOutcome {
        let new_month = self.calendar.advance();
        let turn = self.calendar.turn();
        let decisions = self.planning.decisions_for(new_month);

        info!(month = %new_month, turn, ships = ships.len(), "month started");
        observer.on_month_start(new_month, turn, &decisions);
        self.log.begin_month(new_month, turn);

        let mut ships = ships;
        for day in 1..=self.config.days_per_month {
            ships = self.update_ship_positions(&ships);

            let ctx = DayContext::new(new_month, turn, day, &decisions, &ships, &self.roster);
            self.operations.adjust_production_rates(&ctx);
            self.operations.process_port_operations(&ctx);

            let collisions = count_collisions(&ships, &self.roster);
            let record = DailyRecord {
                month: new_month,
                turn,
                day,
                decisions: decisions.clone(),
                collisions,
                timestamp: Utc::now(),
            };
            debug!(month = %new_month, day, collisions, "day recorded");
            observer.on_day_end(&record, &ships);
            self.log.append(record);
        }

        let summary = match self.log.latest() {
            Some(segment) => aggregate(segment),
            None => aggregate(&MonthLog::new(new_month, turn)),
        };
        observer.on_month_end(&summary, &ships);

        let future_month = self.calendar.planning_month();
        info!(
            month = %new_month,
            turn,
            days = summary.day_count,
            collision_days = summary.collision_days,
            next_to_plan = %future_month,
            "month finished"
        );

        TurnOutcome { new_month, future_month, ships, summary }
    }

    /// Advance `months` times, threading the ship roster through.
    ///
    /// Returns the final roster and one summary per month.
    pub fn run_months<O: TurnObserver>(
        &mut self,
        months:   u32,
        ships:    Vec<Ship>,
        observer: &mut O,
    ) -> (Vec<Ship>, Vec<MonthSummary>) {
        let mut ships = ships;
        let mut summaries = Vec::with_capacity(months as usize);
        for _ in 0..months {
            let outcome = self.advance_month(ships, observer);
            ships = outcome.ships;
            summaries.push(outcome.summary);
        }
        (ships, summaries)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ships inside some island's buffered footprint.
fn count_collisions(ships: &[Ship], roster: &Roster) -> u32 {
    ships
        .iter()
        .filter(|s| check_collision(s.position, roster.islands()))
        .count() as u32
}
