//! Deterministic outward block search.
//!
//! # Scan order
//!
//! ```text
//! for dy in 0, +1, -1, +2, -2, … ±vertical          (layers)
//!   for r in 0 ..= horizontal                        (square rings)
//!     for dz in 0, +1, -1, … ±r
//!       for dx in 0, +1, -1, … ±r   where |dz| == r or |dx| == r
//! ```
//!
//! Cells outside the Euclidean range `max(horizontal, vertical)` are skipped.
//! The first match wins, so ties are settled by this order and never by a
//! distance comparison.  On a ring, cells on the x axis come before cells on
//! the z axis: from the origin, `(3, 0, 0)` is visited before `(0, 0, 3)`.

use ap_core::BlockPos;

use crate::{BlockKind, World};

/// `0, +1, -1, +2, -2, … +max, -max`.
fn alternating(max: i32) -> impl Iterator<Item = i32> {
    std::iter::once(0).chain((1..=max).flat_map(|i| [i, -i]))
}

/// `(dx, dz)` offsets on the square ring of radius `r`, in scan order.
fn ring(r: i32) -> impl Iterator<Item = (i32, i32)> {
    alternating(r).flat_map(move |dz| {
        alternating(r)
            .filter(move |dx| dz.abs() == r || dx.abs() == r)
            .map(move |dx| (dx, dz))
    })
}

/// Every cell around `origin` in scan order.
pub fn ring_scan(origin: BlockPos, horizontal: u32, vertical: u32) -> impl Iterator<Item = BlockPos> {
    let h = horizontal as i32;
    let range = horizontal.max(vertical) as f64;
    alternating(vertical as i32)
        .flat_map(move |dy| {
            (0..=h).flat_map(move |r| ring(r).map(move |(dx, dz)| origin.offset(dx, dy, dz)))
        })
        .filter(move |&p| origin.is_within(p, range))
}

/// First cell in scan order whose block satisfies `predicate`.
pub fn find_block(
    world:      &dyn World,
    origin:     BlockPos,
    horizontal: u32,
    vertical:   u32,
    predicate:  impl Fn(BlockKind) -> bool,
) -> Option<BlockPos> {
    ring_scan(origin, horizontal, vertical).find(|&p| predicate(world.block_at(p)))
}
