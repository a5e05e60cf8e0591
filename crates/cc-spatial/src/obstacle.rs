//! Circular exclusion zones and the field ships steer through.
//!
//! # Spatial index
//!
//! Each obstacle is stored in an R-tree (via `rstar`) under the bounding box
//! of its *influence circle*: the exclusion radius plus the avoidance margin.
//! A point query returns candidates whose box contains the ship; an exact
//! distance test then keeps only obstacles with
//! `radius + margin > distance(ship, centre)`.

use rstar::{AABB, RTree, RTreeObject};

use cc_core::{NavParams, Position, TargetId};
use cc_fleet::Roster;

use crate::{SpatialError, SpatialResult};

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A circle ships are steered around.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub center: Position,
    pub radius: f64,
    /// The island this zone belongs to, if it came from a roster.
    pub owner:  Option<TargetId>,
}

impl Obstacle {
    pub fn new(center: Position, radius: f64) -> Self {
        Self { center, radius, owner: None }
    }

    pub fn owned_by(mut self, owner: TargetId) -> Self {
        self.owner = Some(owner);
        self
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Influence box of obstacle `slot` in the field's `obstacles` vector.
#[derive(Clone)]
struct ZoneEntry {
    min:  [f64; 2],
    max:  [f64; 2],
    slot: usize,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

/// All exclusion zones on the map plus the avoidance margin they were
/// indexed with.
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    margin:    f64,
    index:     RTree<ZoneEntry>,
}

impl ObstacleField {
    /// Index `obstacles` for influence queries with the given margin.
    pub fn new(obstacles: Vec<Obstacle>, margin: f64) -> SpatialResult<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(SpatialError::InvalidMargin(margin));
        }
        for (index, o) in obstacles.iter().enumerate() {
            if !o.center.is_finite() {
                return Err(SpatialError::InvalidObstacle { index, reason: "non-finite centre" });
            }
            if !o.radius.is_finite() || o.radius < 0.0 {
                return Err(SpatialError::InvalidObstacle { index, reason: "radius must be finite and non-negative" });
            }
        }

        let entries: Vec<ZoneEntry> = obstacles
            .iter()
            .enumerate()
            .map(|(slot, o)| {
                let reach = o.radius + margin;
                ZoneEntry {
                    min: [o.center.x - reach, o.center.y - reach],
                    max: [o.center.x + reach, o.center.y + reach],
                    slot,
                }
            })
            .collect();

        Ok(Self { obstacles, margin, index: RTree::bulk_load(entries) })
    }

    /// A field with no obstacles.  Ships always travel in straight lines.
    pub fn empty() -> Self {
        Self { obstacles: Vec::new(), margin: 0.0, index: RTree::new() }
    }

    /// One obstacle per island in `roster`, radius `exclusion_scale * size`,
    /// indexed with `avoidance_distance` as the margin.  Terminals project
    /// no exclusion zone.
    pub fn from_roster(roster: &Roster, params: &NavParams) -> SpatialResult<Self> {
        let obstacles = roster
            .islands()
            .filter_map(|island| {
                island
                    .exclusion_radius(params.exclusion_scale)
                    .map(|r| Obstacle::new(island.position, r).owned_by(island.id))
            })
            .collect();
        Self::new(obstacles, params.avoidance_distance)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Obstacles whose `radius + margin` exceeds the distance from `pos` to
    /// their centre, in insertion order.
    pub fn influencing(&self, pos: Position) -> Vec<&Obstacle> {
        if !pos.is_finite() {
            return Vec::new();
        }
        let mut slots: Vec<usize> = self
            .index
            .locate_in_envelope_intersecting(&AABB::from_point([pos.x, pos.y]))
            .map(|e| e.slot)
            .filter(|&slot| {
                let o = &self.obstacles[slot];
                o.radius + self.margin > pos.distance(o.center)
            })
            .collect();
        // R-tree traversal order is unspecified; fix it so summed corrections
        // are bit-for-bit reproducible.
        slots.sort_unstable();
        slots.into_iter().map(|slot| &self.obstacles[slot]).collect()
    }
}
