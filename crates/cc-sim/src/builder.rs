//! Fluent builder for constructing a [`TurnScheduler`].

use cc_core::{Calendar, NavParams, TurnConfig};
use cc_fleet::Roster;
use cc_nav::Navigator;
use cc_ops::{LoggingOperations, PortOperations};
use cc_schedule::{DailyLog, PlanningSchedule};

use crate::{SimResult, TurnScheduler};

/// Fluent builder for [`TurnScheduler<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                         |
/// |---------------------|---------------------------------|
/// | `.config(c)`        | `TurnConfig::default()`         |
/// | `.nav_params(p)`    | `NavParams::default()`          |
/// | `.plans(s)`         | empty `PlanningSchedule`        |
/// | `.operations(ops)`  | `LoggingOperations`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = SchedulerBuilder::new(roster)
///     .config(TurnConfig { planning_horizon: 3, ..TurnConfig::default() })
///     .plans(load_plans_csv(Path::new("plans.csv"))?)
///     .operations(MyQuotas::default())
///     .build()?;
/// ```
pub struct SchedulerBuilder<P: PortOperations = LoggingOperations> {
    roster:     Roster,
    config:     TurnConfig,
    nav_params: NavParams,
    plans:      PlanningSchedule,
    operations: P,
}

impl SchedulerBuilder<LoggingOperations> {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            config:     TurnConfig::default(),
            nav_params: NavParams::default(),
            plans:      PlanningSchedule::new(),
            operations: LoggingOperations,
        }
    }
}

impl<P: PortOperations> SchedulerBuilder<P> {
    pub fn config(mut self, config: TurnConfig) -> Self {
        self.config = config;
        self
    }

    pub fn nav_params(mut self, params: NavParams) -> Self {
        self.nav_params = params;
        self
    }

    /// Seed the planning schedule, e.g. from `cc_schedule::load_plans_csv`.
    pub fn plans(mut self, plans: PlanningSchedule) -> Self {
        self.plans = plans;
        self
    }

    /// Replace the production / port hooks.
    pub fn operations<Q: PortOperations>(self, operations: Q) -> SchedulerBuilder<Q> {
        SchedulerBuilder {
            roster:     self.roster,
            config:     self.config,
            nav_params: self.nav_params,
            plans:      self.plans,
            operations,
        }
    }

    /// Validate the tunables, index the roster's exclusion zones, and return
    /// a scheduler sitting on `config.start_month`.
    pub fn build(self) -> SimResult<TurnScheduler<P>> {
        self.config.validate()?;
        let navigator = Navigator::for_roster(&self.roster, self.nav_params)?;

        Ok(TurnScheduler {
            calendar:   Calendar::new(self.config.start_month, self.config.planning_horizon),
            log:        DailyLog::new(self.config.retention),
            config:     self.config,
            planning:   self.plans,
            navigator,
            roster:     self.roster,
            operations: self.operations,
        })
    }
}
