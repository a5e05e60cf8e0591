//! The resolved `Roster` of stationary targets and its builder.
//!
//! # Resolution
//!
//! [`RosterBuilder::build`] performs every name lookup the simulation will
//! ever need:
//!
//! 1. Target names are indexed (exact match, names must be unique).
//! 2. Each island's arrival point is the first docking point whose name
//!    contains the island name, or the island centre if none does.
//! 3. Each ship's destination name is resolved to a `TargetId`.
//!
//! A destination that matches no target is an *unresolved reference*.  Under
//! [`ResolvePolicy::Lenient`] (the default) the ship is left idle and the
//! reference is recorded in [`Roster::unresolved`]; under
//! [`ResolvePolicy::Strict`] the build fails.

use tracing::{debug, warn};

use cc_core::{Position, ShipId, TargetId};

use crate::{DockingPoint, FleetError, FleetResult, Ship, ShipSpec, Target, TargetKind, TargetSpec};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, TargetId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, TargetId>;

// ── Policy / unresolved references ────────────────────────────────────────────

/// What to do with a ship destination that names no known target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Leave the ship idle and record the reference.
    #[default]
    Lenient,
    /// Fail the build with [`FleetError::UnresolvedReference`].
    Strict,
}

/// A ship destination that could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedRef {
    pub ship:        ShipId,
    pub destination: String,
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Immutable set of targets, indexed by `TargetId`, with arrival points
/// already adjusted for docking points.
#[derive(Debug, Clone)]
pub struct Roster {
    targets:        Vec<Target>,
    /// Parallel to `targets`: where ships bound for that target actually go.
    arrival_points: Vec<Position>,
    /// Parallel to `targets`: index into `docking_points` for docked islands.
    docks:          Vec<Option<usize>>,
    docking_points: Vec<DockingPoint>,
    by_name:        NameIndex,
    unresolved:     Vec<UnresolvedRef>,
}

impl Roster {
    /// A roster with no targets.  Every destination is unresolved.
    pub fn empty() -> Self {
        Self {
            targets:        Vec::new(),
            arrival_points: Vec::new(),
            docks:          Vec::new(),
            docking_points: Vec::new(),
            by_name:        NameIndex::default(),
            unresolved:     Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[inline]
    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.targets.get(id.index())
    }

    /// Effective navigation point for ships bound to `id`.
    #[inline]
    pub fn arrival_point(&self, id: TargetId) -> Option<Position> {
        self.arrival_points.get(id.index()).copied()
    }

    /// The docking point overriding island `id`'s centre, if any.
    pub fn docking_point(&self, id: TargetId) -> Option<&DockingPoint> {
        let slot = (*self.docks.get(id.index())?)?;
        self.docking_points.get(slot)
    }

    pub fn docking_points(&self) -> &[DockingPoint] {
        &self.docking_points
    }

    /// Exact-name lookup, for hosts re-routing ships between turns.
    pub fn resolve(&self, name: &str) -> Option<TargetId> {
        self.by_name.get(name).copied()
    }

    pub fn islands(&self) -> impl Iterator<Item = &Target> + '_ {
        self.targets.iter().filter(|t| t.is_island())
    }

    /// Destinations that matched nothing during the build (lenient policy).
    pub fn unresolved(&self) -> &[UnresolvedRef] {
        &self.unresolved
    }
}

// ── RosterBuilder ─────────────────────────────────────────────────────────────

/// Fluent construction of a [`Roster`] and the initial resolved ships.
///
/// ```
/// use cc_core::Position;
/// use cc_fleet::{RosterBuilder, ShipSpec, TargetSpec};
///
/// let (roster, ships) = RosterBuilder::new()
///     .target(TargetSpec::terminal("Deep Sea Terminal", Position::new(50.0, 20.0), 80.0))
///     .ship(ShipSpec::new("VLCC Oceanking", Position::new(60.0, 25.0), 315.0)
///         .bound_for("Deep Sea Terminal"))
///     .build()
///     .unwrap();
/// assert_eq!(ships[0].destination, roster.resolve("Deep Sea Terminal"));
/// ```
#[derive(Default)]
pub struct RosterBuilder {
    policy:         ResolvePolicy,
    targets:        Vec<TargetSpec>,
    docking_points: Vec<DockingPoint>,
    ships:          Vec<ShipSpec>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: ResolvePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn target(mut self, spec: TargetSpec) -> Self {
        self.targets.push(spec);
        self
    }

    pub fn targets(mut self, specs: impl IntoIterator<Item = TargetSpec>) -> Self {
        self.targets.extend(specs);
        self
    }

    pub fn docking_point(mut self, dock: DockingPoint) -> Self {
        self.docking_points.push(dock);
        self
    }

    pub fn docking_points(mut self, docks: impl IntoIterator<Item = DockingPoint>) -> Self {
        self.docking_points.extend(docks);
        self
    }

    pub fn ship(mut self, spec: ShipSpec) -> Self {
        self.ships.push(spec);
        self
    }

    pub fn ships(mut self, specs: impl IntoIterator<Item = ShipSpec>) -> Self {
        self.ships.extend(specs);
        self
    }

    /// Validate the catalogs, resolve every name, and return the roster plus
    /// the resolved ships (indexed by `ShipId`).
    pub fn build(self) -> FleetResult<(Roster, Vec<Ship>)> {
        // ── Targets ───────────────────────────────────────────────────────
        let mut by_name = NameIndex::default();
        let mut targets = Vec::with_capacity(self.targets.len());

        for (i, spec) in self.targets.into_iter().enumerate() {
            check_position("target", &spec.name, spec.position)?;
            if !spec.size.is_finite() || spec.size < 0.0 {
                return Err(FleetError::Config(format!(
                    "target {:?} has invalid size {}",
                    spec.name, spec.size
                )));
            }
            let id = TargetId::try_from(i)
                .map_err(|_| FleetError::Config("too many targets".to_owned()))?;
            if by_name.insert(spec.name.clone(), id).is_some() {
                return Err(FleetError::DuplicateName { what: "target", name: spec.name });
            }
            targets.push(Target {
                id,
                name:     spec.name,
                kind:     spec.kind,
                position: spec.position,
                size:     spec.size,
                stats:    spec.stats,
            });
        }

        // ── Docking points → arrival points ───────────────────────────────
        for dock in &self.docking_points {
            check_position("docking point", &dock.name, dock.position)?;
        }

        let docks: Vec<Option<usize>> = targets
            .iter()
            .map(|t| match t.kind {
                TargetKind::Island => self
                    .docking_points
                    .iter()
                    .position(|d| d.serves(&t.name)),
                TargetKind::Terminal => None,
            })
            .collect();

        let arrival_points: Vec<Position> = targets
            .iter()
            .zip(&docks)
            .map(|(t, dock)| match dock {
                Some(slot) => {
                    let d = &self.docking_points[*slot];
                    debug!(island = %t.name, dock = %d.name, "docking point overrides island centre");
                    d.position
                }
                None => t.position,
            })
            .collect();

        // ── Ships ─────────────────────────────────────────────────────────
        let mut ship_names = std::collections::HashSet::with_capacity(self.ships.len());
        let mut ships = Vec::with_capacity(self.ships.len());
        let mut unresolved = Vec::new();

        for (i, spec) in self.ships.into_iter().enumerate() {
            check_position("ship", &spec.name, spec.position)?;
            if !spec.heading.is_finite() {
                return Err(FleetError::Config(format!(
                    "ship {:?} has non-finite heading",
                    spec.name
                )));
            }
            if !ship_names.insert(spec.name.clone()) {
                return Err(FleetError::DuplicateName { what: "ship", name: spec.name });
            }
            let id = ShipId::try_from(i)
                .map_err(|_| FleetError::Config("too many ships".to_owned()))?;

            let destination = match spec.destination {
                None => None,
                Some(name) => match by_name.get(&name) {
                    Some(&target) => Some(target),
                    None => match self.policy {
                        ResolvePolicy::Strict => {
                            return Err(FleetError::UnresolvedReference {
                                ship:        spec.name,
                                destination: name,
                            });
                        }
                        ResolvePolicy::Lenient => {
                            warn!(ship = %spec.name, destination = %name, "unresolved destination; ship stays idle");
                            unresolved.push(UnresolvedRef { ship: id, destination: name });
                            None
                        }
                    },
                },
            };

            ships.push(Ship {
                id,
                name: spec.name,
                position: spec.position,
                heading: spec.heading,
                destination,
                cargo: spec.cargo,
            });
        }

        let roster = Roster {
            targets,
            arrival_points,
            docks,
            docking_points: self.docking_points,
            by_name,
            unresolved,
        };
        Ok((roster, ships))
    }
}

fn check_position(what: &str, name: &str, pos: Position) -> FleetResult<()> {
    if pos.is_finite() {
        Ok(())
    } else {
        Err(FleetError::Config(format!("{what} {name:?} has non-finite position {pos:?}")))
    }
}
