//! `PlanningSchedule`: decisions keyed by the month they apply to.

use std::collections::BTreeMap;

use cc_core::Month;
use serde_json::{Map, Value};

/// The decisions value used for months nobody planned: `{}`.
pub fn empty_decisions() -> Value {
    Value::Object(Map::new())
}

/// Month → decisions.  Writing a month twice keeps the second value.
///
/// Plans are not consumed by execution; a plan for March applies to every
/// March until it is overwritten or removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanningSchedule {
    plans: BTreeMap<Month, Value>,
}

impl PlanningSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `decisions` for `month`, returning the value it replaced.
    pub fn set(&mut self, month: Month, decisions: Value) -> Option<Value> {
        self.plans.insert(month, decisions)
    }

    pub fn get(&self, month: Month) -> Option<&Value> {
        self.plans.get(&month)
    }

    /// The decisions to execute for `month`: the stored plan, or `{}`.
    pub fn decisions_for(&self, month: Month) -> Value {
        self.plans.get(&month).cloned().unwrap_or_else(empty_decisions)
    }

    pub fn remove(&mut self, month: Month) -> Option<Value> {
        self.plans.remove(&month)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Planned months in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &Value)> + '_ {
        self.plans.iter().map(|(m, v)| (*m, v))
    }
}

impl Extend<(Month, Value)> for PlanningSchedule {
    /// Later entries overwrite earlier ones for the same month.
    fn extend<T: IntoIterator<Item = (Month, Value)>>(&mut self, iter: T) {
        for (month, decisions) in iter {
            self.set(month, decisions);
        }
    }
}

impl FromIterator<(Month, Value)> for PlanningSchedule {
    fn from_iter<T: IntoIterator<Item = (Month, Value)>>(iter: T) -> Self {
        let mut schedule = Self::new();
        schedule.extend(iter);
        schedule
    }
}
