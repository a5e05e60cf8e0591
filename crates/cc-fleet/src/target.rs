//! Stationary targets: oil terminals and islands, plus island docking points.

use std::collections::BTreeMap;

use cc_core::{Position, TargetId};

/// What kind of stationary entity a target is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    Terminal,
    /// Islands project an exclusion zone that ships steer around.
    Island,
}

impl TargetKind {
    pub fn parse(s: &str) -> Option<TargetKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Some(TargetKind::Terminal),
            "island"   => Some(TargetKind::Island),
            _ => None,
        }
    }
}

/// A target as described by the host catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSpec {
    pub name:     String,
    pub kind:     TargetKind,
    pub position: Position,
    /// Display diameter.
    pub size:     f64,
    /// Popup statistics (production, inventory, population, …).  Never read
    /// by the simulation.
    pub stats:    BTreeMap<String, String>,
}

impl TargetSpec {
    pub fn terminal(name: impl Into<String>, position: Position, size: f64) -> Self {
        Self::new(name, TargetKind::Terminal, position, size)
    }

    pub fn island(name: impl Into<String>, position: Position, size: f64) -> Self {
        Self::new(name, TargetKind::Island, position, size)
    }

    fn new(name: impl Into<String>, kind: TargetKind, position: Position, size: f64) -> Self {
        Self { name: name.into(), kind, position, size, stats: BTreeMap::new() }
    }

    pub fn stat(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.stats.insert(key.into(), value.into());
        self
    }
}

/// A resolved target owned by the [`Roster`][crate::Roster].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:       TargetId,
    pub name:     String,
    pub kind:     TargetKind,
    pub position: Position,
    pub size:     f64,
    pub stats:    BTreeMap<String, String>,
}

impl Target {
    #[inline]
    pub fn is_island(&self) -> bool {
        self.kind == TargetKind::Island
    }

    /// Radius of the circle ships steer around, or `None` for terminals.
    pub fn exclusion_radius(&self, exclusion_scale: f64) -> Option<f64> {
        self.is_island().then(|| self.size * exclusion_scale)
    }
}

/// A berth offset from an island's interior.
///
/// Associated with the first island whose name is a substring of the
/// docking point's name ("Calnera East Dock" → "Calnera East").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockingPoint {
    pub name:     String,
    pub position: Position,
}

impl DockingPoint {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self { name: name.into(), position }
    }

    #[inline]
    pub fn serves(&self, island_name: &str) -> bool {
        !island_name.is_empty() && self.name.contains(island_name)
    }
}
