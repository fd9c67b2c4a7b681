//! `ap-core` — foundational types for the `apiary` agent framework.
//!
//! This crate is a dependency of every other `ap-*` crate.  It has no `ap-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `GoalId`                                     |
//! | [`pos`]   | `BlockPos` integer grid coordinate                      |
//! | [`time`]  | `Tick`, `SimConfig`, tick/second conversion            |
//! | [`rng`]   | `AgentRng` (per-agent, deterministic)                   |
//! | [`error`] | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, GoalId};
pub use pos::BlockPos;
pub use rng::AgentRng;
pub use time::{SimConfig, Tick, TICKS_PER_SECOND};
