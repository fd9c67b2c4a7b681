//! CSV world loader.
//!
//! # CSV format
//!
//! One row per non-air block.  `capacity` is only read for `hive` rows and
//! defaults to [`DEFAULT_HIVE_CAPACITY`] when empty.
//!
//! ```csv
//! x,y,z,kind,capacity
//! 0,-1,0,solid,
//! 3,0,0,flower,
//! 10,0,4,hive,2
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ap_core::BlockPos;

use crate::world::DEFAULT_HIVE_CAPACITY;
use crate::{BlockKind, GridWorld, WorldError};

#[derive(Deserialize)]
struct BlockRecord {
    x:        i32,
    y:        i32,
    z:        i32,
    kind:     String,
    capacity: Option<u8>,
}

/// Load a [`GridWorld`] from a CSV file.
pub fn load_world_csv(path: &Path) -> Result<GridWorld, WorldError> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_world_reader(file)
}

/// Like [`load_world_csv`] but accepts any `Read` source.
pub fn load_world_reader<R: Read>(reader: R) -> Result<GridWorld, WorldError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut world = GridWorld::new();

    for result in csv_reader.deserialize::<BlockRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let pos = BlockPos::new(row.x, row.y, row.z);
        match row.kind.parse::<BlockKind>()? {
            BlockKind::Hive => {
                world.add_hive(pos, row.capacity.unwrap_or(DEFAULT_HIVE_CAPACITY));
            }
            kind => world.set_block(pos, kind),
        }
    }

    log::debug!(
        "loaded world: {} blocks, {} points of interest",
        world.block_count(),
        world.pois().len()
    );
    Ok(world)
}
