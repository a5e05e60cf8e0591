//! Simulation calendar.
//!
//! # Design
//!
//! Simulated time advances one month per turn.  The calendar is a cycle of
//! twelve named months with no notion of years: advancing from December
//! wraps to January.  Every month is executed as a fixed number of days
//! (`DAYS_PER_MONTH` by default), regardless of its real-world length.
//!
//! The planning horizon names the month the player should be planning for
//! next.  It is purely informational and never changes what gets executed.

use std::fmt;
use std::str::FromStr;

use crate::CcError;

/// Days executed per month unless `TurnConfig::days_per_month` overrides it.
pub const DAYS_PER_MONTH: u32 = 30;

// ── Month ─────────────────────────────────────────────────────────────────────

/// One of the twelve calendar months.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    #[default]
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const COUNT: usize = 12;

    /// All months in calendar order.
    pub const ALL: [Month; Month::COUNT] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month at `index`, wrapping modulo 12.
    #[inline]
    pub fn from_index(index: usize) -> Month {
        Self::ALL[index % Self::COUNT]
    }

    /// Zero-based position in the calendar (January = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The month `n` months after `self`.
    #[inline]
    pub fn offset(self, n: usize) -> Month {
        Self::from_index(self.index() + n % Self::COUNT)
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January   => "January",
            Month::February  => "February",
            Month::March     => "March",
            Month::April     => "April",
            Month::May       => "May",
            Month::June      => "June",
            Month::July      => "July",
            Month::August    => "August",
            Month::September => "September",
            Month::October   => "October",
            Month::November  => "November",
            Month::December  => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Month {
    type Err = CcError;

    /// Parse a full month name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CcError::Parse(format!("unknown month {trimmed:?}")))
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Cyclic month calendar with a forward planning horizon.
///
/// `index` is always in `0..12`.  `turn` counts how many months have been
/// advanced since construction and is what distinguishes two Januaries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    index:            usize,
    planning_horizon: u32,
    turn:             u64,
}

impl Calendar {
    pub fn new(start: Month, planning_horizon: u32) -> Self {
        Self { index: start.index(), planning_horizon, turn: 0 }
    }

    #[inline]
    pub fn current(&self) -> Month {
        Month::from_index(self.index)
    }

    /// Month `offset` months ahead of the current one, wrapping modulo 12.
    #[inline]
    pub fn future(&self, offset: u32) -> Month {
        self.current().offset(offset as usize)
    }

    /// The month the host should plan for next (`future(planning_horizon)`).
    #[inline]
    pub fn planning_month(&self) -> Month {
        self.future(self.planning_horizon)
    }

    #[inline]
    pub fn planning_horizon(&self) -> u32 {
        self.planning_horizon
    }

    /// Number of completed `advance` calls.
    #[inline]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Step to the next month and return it.
    pub fn advance(&mut self) -> Month {
        self.index = (self.index + 1) % Month::COUNT;
        self.turn += 1;
        self.current()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Month::January, 2)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (turn {}, planning {})", self.current(), self.turn, self.planning_month())
    }
}
