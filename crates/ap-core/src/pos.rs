//! Integer block coordinate and distance helpers.
//!
//! The world is a grid of unit cells.  Distances are compared squared
//! (`i64`) wherever possible so range checks stay exact.

use std::fmt;

/// A cell in the block grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell displaced by `(dx, dy, dz)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, z: self.z + dz }
    }

    /// Squared Euclidean distance in cells.
    #[inline]
    pub fn distance_sq(self, other: BlockPos) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        let dz = self.z as i64 - other.z as i64;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance in cells.
    #[inline]
    pub fn distance(self, other: BlockPos) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// `true` if `other` lies within `radius` cells (inclusive).
    #[inline]
    pub fn is_within(self, other: BlockPos, radius: f64) -> bool {
        (self.distance_sq(other) as f64) <= radius * radius
    }

    /// Manhattan distance in cells.
    #[inline]
    pub fn manhattan(self, other: BlockPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// Move one cell toward `target` along every axis that differs.
    ///
    /// Returns `self` when already at `target`.
    pub fn step_toward(self, target: BlockPos) -> BlockPos {
        BlockPos {
            x: self.x + (target.x - self.x).signum(),
            y: self.y + (target.y - self.y).signum(),
            z: self.z + (target.z - self.z).signum(),
        }
    }

    /// `[x, y, z]` array form, as used by the R-tree POI index.
    #[inline]
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
