//! `ap-goal` — goal contract and priority arbitration.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`control`]  | `ControlResource`, `ResourceSet`                             |
//! | [`goal`]     | `GoalMeta`, `Goal<C>`, `Calm<G>` decorator, `ThreatGate`     |
//! | [`selector`] | `GoalSelector<G>`, `GoalStatus`, `SelectorTick`              |
//! | [`observer`] | `SelectorObserver`, `NoopSelectorObserver`, `Transcript`     |
//! | [`error`]    | `GoalError`, `GoalResult<T>`                                 |
//!
//! # Arbitration in one paragraph
//!
//! Every tick the selector (1) stops each running goal whose
//! `should_continue` fails, releasing its controls, then (2) walks all goals
//! in ascending priority and starts each idle goal whose controls are free
//! and whose `can_start` holds, reserving its controls for the rest of the
//! pass, and finally (3) ticks every running goal once in priority order.
//! Stopping before starting is what keeps two goals from ever holding the
//! same control in the same tick.
//!
//! The context type `C` is whatever the owning agent lends its goals for the
//! duration of one call; goals never capture agent state.

pub mod control;
pub mod error;
pub mod goal;
pub mod observer;
pub mod selector;


pub use control::{ControlResource, ResourceSet};
pub use error::{GoalError, GoalResult};
pub use goal::{Calm, Goal, GoalMeta, ThreatGate};
pub use observer::{GoalEvent, NoopSelectorObserver, SelectorObserver, Transcript};
pub use selector::{GoalSelector, GoalStatus, SelectorTick};
