//! `ap-world` — the world and navigation collaborators consumed by goals.
//!
//! Goals never implement pathfinding or spatial indexing themselves; they
//! talk to a [`World`] (block and point-of-interest queries) and a
//! [`Navigator`] (path requests and polling).  This crate defines both
//! interfaces and ships small grid-based implementations used by the
//! simulation and the tests.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`block`]  | `BlockKind`                                                  |
//! | [`poi`]    | `PointOfInterest`, `PoiKind`, `PoiIndex` (R-tree)            |
//! | [`world`]  | `World` trait, `GridWorld`                                   |
//! | [`nav`]    | `Navigator` trait, `GridNavigator`, `Path`                   |
//! | [`scan`]   | `ring_scan`, `find_block` — deterministic outward search     |
//! | [`loader`] | `load_world_csv`, `load_world_reader`                        |
//! | [`error`]  | `WorldError`, `WorldResult<T>`                               |

pub mod block;
pub mod error;
pub mod loader;
pub mod nav;
pub mod poi;
pub mod scan;
pub mod world;

#[cfg(test)]
mod tests;

pub use block::BlockKind;
pub use error::{WorldError, WorldResult};
pub use loader::{load_world_csv, load_world_reader};
pub use nav::{GridNavigator, Navigator, Path};
pub use poi::{PoiIndex, PoiKind, PointOfInterest};
pub use scan::{find_block, ring_scan};
pub use world::{GridWorld, World};
