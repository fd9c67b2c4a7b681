//! The `World` query trait and the grid-backed reference implementation.

use rustc_hash::FxHashMap;

use ap_core::BlockPos;

use crate::{BlockKind, PoiIndex, PoiKind, PointOfInterest};

/// Read-only world queries consumed by goals.
///
/// The world is never mutated while agents tick, so implementations must be
/// `Sync` to allow the per-agent phase to run in parallel.
pub trait World: Sync {
    /// Block occupying `pos`.
    fn block_at(&self, pos: BlockPos) -> BlockKind;

    /// The point of interest registered at exactly `pos`, if any.
    fn poi_at(&self, pos: BlockPos) -> Option<&PointOfInterest>;

    /// Nearest POI within `radius` of `origin` accepted by `predicate`.
    fn nearest_poi(
        &self,
        origin:    BlockPos,
        radius:    u32,
        predicate: &dyn Fn(&PointOfInterest) -> bool,
    ) -> Option<BlockPos>;
}

/// Sparse block grid plus a POI index.
///
/// Unset cells read as [`BlockKind::Air`].  Placing a `Hive` block also
/// registers a hive POI; overwriting it with anything else unregisters it.
#[derive(Default)]
pub struct GridWorld {
    blocks: FxHashMap<BlockPos, BlockKind>,
    pois:   PoiIndex,
}

/// Residents a hive holds unless a capacity is given.
pub const DEFAULT_HIVE_CAPACITY: u8 = 3;

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block at `pos`.
    pub fn set_block(&mut self, pos: BlockPos, kind: BlockKind) {
        if kind == BlockKind::Hive {
            self.add_hive(pos, DEFAULT_HIVE_CAPACITY);
            return;
        }
        if self.blocks.get(&pos) == Some(&BlockKind::Hive) {
            self.pois.remove(pos);
        }
        if kind == BlockKind::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, kind);
        }
    }

    /// Place a hive block with room for `capacity` residents.
    pub fn add_hive(&mut self, pos: BlockPos, capacity: u8) {
        self.blocks.insert(pos, BlockKind::Hive);
        self.pois.insert(PointOfInterest {
            pos,
            kind: PoiKind::Hive,
            capacity,
            occupants: 0,
        });
    }

    /// Fill every cell in the inclusive box `min..=max` with `kind`.
    pub fn fill(&mut self, min: BlockPos, max: BlockPos, kind: BlockKind) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(BlockPos::new(x, y, z), kind);
                }
            }
        }
    }

    /// Set how many residents currently occupy the hive at `pos`.
    ///
    /// Returns `false` if no hive is registered there.
    pub fn set_occupants(&mut self, pos: BlockPos, occupants: u8) -> bool {
        match self.pois.get_mut(pos) {
            Some(poi) => {
                poi.occupants = occupants;
                true
            }
            None => false,
        }
    }

    /// Number of non-air cells.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn pois(&self) -> &PoiIndex {
        &self.pois
    }
}

impl World for GridWorld {
    #[inline]
    fn block_at(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    fn poi_at(&self, pos: BlockPos) -> Option<&PointOfInterest> {
        self.pois.get(pos)
    }

    fn nearest_poi(
        &self,
        origin:    BlockPos,
        radius:    u32,
        predicate: &dyn Fn(&PointOfInterest) -> bool,
    ) -> Option<BlockPos> {
        self.pois.nearest(origin, radius, predicate)
    }
}
