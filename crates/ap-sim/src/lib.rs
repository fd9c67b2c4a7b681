//! `ap-sim` — tick loop over a population of bees.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Bees    — every bee: timers, one goal-selector pass, navigator step
//!               (parallel with the `parallel` feature; the world is read-only).
//!   ② Alerts  — in ascending AgentId order, each bee struck this tick alerts
//!               every other bee within alert_radius.
//!   ③ Observe — on_tick_end, and on_snapshot every snapshot_interval_ticks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the bee phase on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ap_core::{BlockPos, SimConfig};
//! use ap_sim::{NoopObserver, SimBuilder};
//! use ap_world::load_world_csv;
//!
//! let world = load_world_csv(path)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), world)
//!     .spawn(BlockPos::new(0, 1, 0))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use sim::Sim;
