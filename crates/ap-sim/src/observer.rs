//! Simulation observer trait for progress reporting and debug capture.

use ap_bee::Bee;
use ap_core::{AgentId, BlockPos, Tick};

/// Goal transitions and alerts summed over all bees for one tick.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct TickStats {
    pub started: usize,
    pub stopped: usize,
    pub ticked:  usize,
    /// Bees that received an alert this tick.
    pub alerted: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.every(self.interval) {
///             println!("tick {tick}: {} goals started", stats.started);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any bee runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when bee `from` broadcasts an attacker at `attacker`.
    fn on_alert(&mut self, _tick: Tick, _from: AgentId, _attacker: BlockPos) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to every bee, e.g. to record `Bee::debug_snapshot`s.
    fn on_snapshot(&mut self, _tick: Tick, _bees: &[Bee]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
