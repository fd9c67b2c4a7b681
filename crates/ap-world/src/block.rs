//! Block kinds stored in the world grid.

use std::str::FromStr;

use crate::WorldError;

/// What occupies a world cell.  Cells never written to are `Air`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    #[default]
    Air,
    Solid,
    Water,
    /// A flowering plant; can be flown through.
    Flower,
    /// A home site.  Solid, but a navigator may end a path inside it.
    Hive,
}

impl BlockKind {
    /// `true` if an agent can occupy the cell.
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, BlockKind::Air | BlockKind::Flower)
    }

    #[inline]
    pub fn is_flower(self) -> bool {
        self == BlockKind::Flower
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Air    => "air",
            BlockKind::Solid  => "solid",
            BlockKind::Water  => "water",
            BlockKind::Flower => "flower",
            BlockKind::Hive   => "hive",
        }
    }
}

impl FromStr for BlockKind {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "air"    => Ok(BlockKind::Air),
            "solid"  => Ok(BlockKind::Solid),
            "water"  => Ok(BlockKind::Water),
            "flower" => Ok(BlockKind::Flower),
            "hive"   => Ok(BlockKind::Hive),
            other    => Err(WorldError::UnknownBlockKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
