//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! discrete world step; at the nominal rate there are [`TICKS_PER_SECOND`]
//! ticks per simulated second.  All goal budgets and cooldowns are expressed
//! in ticks so schedule arithmetic is exact.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Nominal world steps per simulated second.
pub const TICKS_PER_SECOND: u32 = 20;

/// Number of ticks in `secs` simulated seconds.
#[inline]
pub const fn secs(secs: u32) -> u32 {
    secs * TICKS_PER_SECOND
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// `true` every `n` ticks (`n == 0` never fires).
    #[inline]
    pub fn every(self, n: u64) -> bool {
        n > 0 && self.0 % n == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Report a debug snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject settings the tick loop cannot honour.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             secs(60) as u64,
            seed:                    0,
            num_threads:             None,
            snapshot_interval_ticks: 0,
        }
    }
}
