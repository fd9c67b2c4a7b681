//! `ap-bee` — the bee agent built on the goal selector.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`state`]   | `BeeState`, `ExclusionList`, `FailureCounters`                |
//! | [`context`] | `BeeContext<'a>` — what goals see during one selector call    |
//! | [`goals`]   | The standard goal set and `standard_goals`                    |
//! | [`bee`]     | `Bee<N>`, persistence (`Compound`), `BeeDebug` snapshots      |
//! | [`config`]  | `BeeConfig` — every tunable constant, JSON-loadable           |
//! | [`error`]   | `BeeError`, `BeeResult<T>`                                    |
//!
//! # Tick order
//!
//! `Bee::tick` first counts down every timer in `BeeState`, then lends the
//! state, navigator, RNG and world to the selector through a `BeeContext`,
//! and finally advances the navigator to obtain the new position.  Goals
//! therefore see the position from the start of the tick and only ever move
//! the bee by requesting paths.

pub mod bee;
pub mod config;
pub mod context;
pub mod error;
pub mod goals;
pub mod state;


pub use bee::{Bee, BeeDebug, BeeGoal, Compound};
pub use config::BeeConfig;
pub use context::BeeContext;
pub use error::{BeeError, BeeResult};
pub use state::{BeeState, ExclusionList, FailureCounters};
