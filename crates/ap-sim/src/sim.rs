//! The `Sim` struct and its tick loop.

use ap_bee::{Bee, BeeDebug};
use ap_core::{AgentId, BlockPos, SimConfig, Tick};
use ap_world::World;

use crate::{SimError, SimObserver, SimResult, TickStats};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<W>` owns the world and every bee and drives the two-phase tick loop:
///
/// 1. **Bee phase** (optionally parallel with the `parallel` feature): each
///    bee counts down its timers, runs one goal-selector pass, and moves.
///    The world is only read.
/// 2. **Alert phase** (sequential, ascending `AgentId`): every bee that was
///    struck this tick alerts all other bees within `alert_radius`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: World> {
    pub config: SimConfig,

    /// The next tick to process.
    pub current_tick: Tick,

    /// Read-only during the bee phase.
    pub world: W,

    /// Indexed by `AgentId`.
    pub bees: Vec<Bee>,

    /// Distance within which a struck bee rallies its neighbours.
    pub alert_radius: f64,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<W: World> Sim<W> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Hit bee `agent` from an attacker standing at `from`.
    pub fn strike(&mut self, agent: AgentId, from: BlockPos) -> SimResult<()> {
        self.bee_mut(agent)?.strike(from);
        Ok(())
    }

    pub fn bee(&self, agent: AgentId) -> SimResult<&Bee> {
        self.bees.get(agent.index()).ok_or(SimError::AgentNotFound(agent))
    }

    pub fn bee_mut(&mut self, agent: AgentId) -> SimResult<&mut Bee> {
        self.bees.get_mut(agent.index()).ok_or(SimError::AgentNotFound(agent))
    }

    /// Debug view of every bee in `AgentId` order.
    pub fn debug_snapshots(&self) -> Vec<BeeDebug> {
        self.bees.iter().map(Bee::debug_snapshot).collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_tick_start(now);

        let mut stats = self.bee_phase(now);
        stats.alerted = self.alert_phase(now, observer);

        observer.on_tick_end(now, &stats);
        if now.every(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(now, &self.bees);
        }
        self.current_tick = now.next();
    }

    /// Tick every bee once.
    fn bee_phase(&mut self, now: Tick) -> TickStats {
        let world = &self.world;
        let bees = &mut self.bees;

        #[cfg(not(feature = "parallel"))]
        let summaries: Vec<_> = bees.iter_mut().map(|bee| bee.tick(world, now)).collect();

        #[cfg(feature = "parallel")]
        let summaries: Vec<_> = {
            use rayon::prelude::*;

            match &self.pool {
                Some(pool) => pool.install(|| bees.par_iter_mut().map(|bee| bee.tick(world, now)).collect()),
                None => bees.par_iter_mut().map(|bee| bee.tick(world, now)).collect(),
            }
        };

        summaries.iter().fold(TickStats::default(), |mut acc, s| {
            acc.started += s.started;
            acc.stopped += s.stopped;
            acc.ticked += s.ticked;
            acc
        })
    }

    /// Deliver alerts raised during the bee phase.  Returns how many bees
    /// were notified.
    fn alert_phase<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let radius = self.alert_radius;
        let mut notified = 0;

        for i in 0..self.bees.len() {
            let Some(attacker) = self.bees[i].take_pending_alert() else {
                continue;
            };
            let from = self.bees[i].id();
            let origin = self.bees[i].pos();
            observer.on_alert(now, from, attacker);

            for (j, other) in self.bees.iter_mut().enumerate() {
                if j != i && other.pos().is_within(origin, radius) {
                    other.alert(attacker);
                    notified += 1;
                }
            }
            log::debug!("{now}: bee {from} alerted neighbours about {attacker}");
        }
        notified
    }
}
