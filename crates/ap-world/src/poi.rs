//! Points of interest and their spatial index.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `[x, y, z]` points answers "which POIs lie
//! within `r` cells of `origin`".  Points are widened to `i64` so squared
//! distances never overflow for any `i32` cell.  The per-site record (kind,
//! capacity, occupancy) lives in a hash map keyed by position so occupancy
//! can change without touching the tree.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use ap_core::BlockPos;

/// Kind of point of interest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoiKind {
    /// A home site agents return to and deposit payload in.
    Hive,
}

/// One registered point of interest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    pub pos:       BlockPos,
    pub kind:      PoiKind,
    /// Maximum number of residents.
    pub capacity:  u8,
    /// Current number of residents.
    pub occupants: u8,
}

impl PointOfInterest {
    /// `true` if another resident fits.
    #[inline]
    pub fn has_space(&self) -> bool {
        self.occupants < self.capacity
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq)]
struct PoiEntry {
    pos: BlockPos,
}

fn wide(pos: BlockPos) -> [i64; 3] {
    [pos.x as i64, pos.y as i64, pos.z as i64]
}

impl RTreeObject for PoiEntry {
    type Envelope = AABB<[i64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(wide(self.pos))
    }
}

impl PointDistance for PoiEntry {
    fn distance_2(&self, point: &[i64; 3]) -> i64 {
        let [x, y, z] = wide(self.pos);
        let (dx, dy, dz) = (x - point[0], y - point[1], z - point[2]);
        dx * dx + dy * dy + dz * dz
    }
}

// ── PoiIndex ──────────────────────────────────────────────────────────────────

/// Registry of points of interest with a radius-query index.
#[derive(Default)]
pub struct PoiIndex {
    sites: FxHashMap<BlockPos, PointOfInterest>,
    tree:  RTree<PoiEntry>,
}

impl PoiIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the POI at `poi.pos`.
    pub fn insert(&mut self, poi: PointOfInterest) {
        let pos = poi.pos;
        if self.sites.insert(pos, poi).is_none() {
            self.tree.insert(PoiEntry { pos });
        }
    }

    /// Remove the POI at `pos`, returning it if present.
    pub fn remove(&mut self, pos: BlockPos) -> Option<PointOfInterest> {
        let removed = self.sites.remove(&pos)?;
        self.tree.remove(&PoiEntry { pos });
        Some(removed)
    }

    pub fn get(&self, pos: BlockPos) -> Option<&PointOfInterest> {
        self.sites.get(&pos)
    }

    pub fn get_mut(&mut self, pos: BlockPos) -> Option<&mut PointOfInterest> {
        self.sites.get_mut(&pos)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// The closest POI within `radius` of `origin` accepted by `predicate`.
    ///
    /// Equidistant candidates are ordered by position so the answer does not
    /// depend on R-tree layout.
    pub fn nearest(
        &self,
        origin:    BlockPos,
        radius:    u32,
        predicate: &dyn Fn(&PointOfInterest) -> bool,
    ) -> Option<BlockPos> {
        let r = radius as i64;
        self.tree
            .locate_within_distance(wide(origin), r * r)
            .filter_map(|e| self.sites.get(&e.pos))
            .filter(|poi| predicate(poi))
            .map(|poi| (poi.pos.distance_sq(origin), poi.pos))
            .min()
            .map(|(_, pos)| pos)
    }
}
