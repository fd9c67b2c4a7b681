//! Integration tests for ap-sim.

use ap_bee::{Bee, BeeConfig};
use ap_core::{AgentId, AgentRng, BlockPos, SimConfig, Tick};
use ap_world::{BlockKind, GridNavigator, GridWorld};

use crate::{NoopObserver, SimBuilder, SimObserver, TickStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed:                    42,
        num_threads:             Some(1),
        snapshot_interval_ticks: total_ticks,
    }
}

/// A meadow: a flower patch east of a hive, on open air.
fn meadow() -> GridWorld {
    let mut w = GridWorld::new();
    w.add_hive(BlockPos::new(0, 2, 0), 3);
    for x in 6..9 {
        for z in -1..2 {
            w.set_block(BlockPos::new(x, 0, z), BlockKind::Flower);
        }
    }
    w
}

fn spawns() -> Vec<BlockPos> {
    vec![
        BlockPos::new(1, 0, 0),
        BlockPos::new(-2, 0, 1),
        BlockPos::new(0, 0, -3),
        BlockPos::new(4, 1, 4),
    ]
}

#[derive(Default)]
struct Recorder {
    starts:    u64,
    ends:      u64,
    snapshots: Vec<Tick>,
    alerts:    Vec<(Tick, AgentId, BlockPos)>,
    last:      Option<TickStats>,
    finished:  Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }

    fn on_alert(&mut self, tick: Tick, from: AgentId, attacker: BlockPos) {
        self.alerts.push((tick, from, attacker));
    }

    fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
        self.ends += 1;
        self.last = Some(*stats);
    }

    fn on_snapshot(&mut self, tick: Tick, _bees: &[Bee]) {
        self.snapshots.push(tick);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn spawns_bees_in_order() {
        let sim = SimBuilder::new(test_config(10), meadow()).spawns(spawns()).build().unwrap();
        assert_eq!(sim.bees.len(), 4);
        for (i, bee) in sim.bees.iter().enumerate() {
            assert_eq!(bee.id(), AgentId(i as u32));
            assert_eq!(bee.pos(), spawns()[i]);
        }
    }

    #[test]
    fn negative_alert_radius_errors() {
        let result = SimBuilder::new(test_config(10), meadow()).alert_radius(-1.0).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_threads_errors() {
        let cfg = SimConfig { num_threads: Some(0), ..test_config(10) };
        let result = SimBuilder::new(cfg, meadow()).build();
        assert!(matches!(result, Err(SimError::Core(ap_core::CoreError::Config(_)))));
    }

    #[test]
    fn invalid_bee_config_errors() {
        let bee_cfg = BeeConfig { wander_chance: -0.5, ..BeeConfig::default() };
        let result = SimBuilder::new(test_config(10), meadow()).bee_config(bee_cfg).build();
        assert!(matches!(result, Err(SimError::Bee(_))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn run_visits_every_tick() {
        let cfg = SimConfig { snapshot_interval_ticks: 10, ..test_config(50) };
        let mut sim = SimBuilder::new(cfg, meadow()).spawns(spawns()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, 50);
        assert_eq!(rec.ends, 50);
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(10), Tick(20), Tick(30), Tick(40)]);
        assert_eq!(rec.finished, Some(Tick(50)));
        assert_eq!(sim.current_tick, Tick(50));
    }

    #[test]
    fn run_ticks_ignores_end_tick() {
        let mut sim = SimBuilder::new(test_config(5), meadow()).spawns(spawns()).build().unwrap();
        sim.run_ticks(12, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick, Tick(12));
    }

    #[test]
    fn first_tick_starts_goals() {
        let mut sim = SimBuilder::new(test_config(1), meadow()).spawns(spawns()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let stats = rec.last.unwrap();
        assert!(stats.started >= 1);
        assert!(stats.ticked >= stats.started - stats.stopped);
    }

    #[test]
    fn strike_unknown_bee_errors() {
        let mut sim = SimBuilder::new(test_config(1), meadow()).spawns(spawns()).build().unwrap();
        let err = sim.strike(AgentId(9), BlockPos::ORIGIN).unwrap_err();
        assert!(matches!(err, SimError::AgentNotFound(AgentId(9))));
    }

    #[test]
    fn debug_snapshots_cover_every_bee() {
        let sim = SimBuilder::new(test_config(1), meadow()).spawns(spawns()).build().unwrap();
        let snaps = sim.debug_snapshots();
        assert_eq!(snaps.len(), 4);
        assert_eq!(snaps[3].id, AgentId(3));
        assert_eq!(snaps[0].goals.len(), 8);
    }
}

// ── Alerts ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod alert_tests {
    use super::*;

    #[test]
    fn struck_bee_rallies_neighbours_within_radius() {
        let attacker = BlockPos::new(0, 0, -4);
        let mut sim = SimBuilder::new(test_config(10), GridWorld::new())
            .spawn(BlockPos::ORIGIN)
            .spawn(BlockPos::new(3, 0, 0))
            .spawn(BlockPos::new(30, 0, 0))
            .alert_radius(8.0)
            .build()
            .unwrap();
        sim.strike(AgentId(0), attacker).unwrap();

        let mut rec = Recorder::default();
        sim.run_ticks(1, &mut rec).unwrap();
        assert_eq!(rec.alerts, vec![(Tick(0), AgentId(0), attacker)]);
        assert_eq!(rec.last.unwrap().alerted, 1);

        sim.run_ticks(1, &mut rec).unwrap();
        assert_eq!(sim.bees[1].state().threat_target, Some(attacker));
        assert_eq!(sim.bees[2].state().threat_target, None);
        // Alerted bees do not rebroadcast.
        assert_eq!(rec.alerts.len(), 1);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn same_seed_same_outcome() {
        let build = || SimBuilder::new(test_config(300), meadow()).spawns(spawns()).build().unwrap();
        let mut a = build();
        let mut b = build();
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(a.debug_snapshots(), b.debug_snapshots());
    }

    /// The sim's bee phase must match ticking each bee by hand, in order,
    /// whether or not it runs in parallel.
    #[test]
    fn matches_hand_driven_bees() {
        let cfg = SimConfig { num_threads: Some(4), ..test_config(300) };
        let mut sim = SimBuilder::new(cfg, meadow()).spawns(spawns()).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let world = meadow();
        let bee_cfg = BeeConfig::default();
        let mut bees: Vec<Bee> = spawns()
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let id = AgentId(i as u32);
                Bee::new(id, pos, GridNavigator::new(16), AgentRng::new(42, id), &bee_cfg).unwrap()
            })
            .collect();
        for t in 0..300 {
            for bee in bees.iter_mut() {
                bee.tick(&world, Tick(t));
            }
        }

        let by_hand: Vec<_> = bees.iter().map(Bee::debug_snapshot).collect();
        assert_eq!(sim.debug_snapshots(), by_hand);
    }
}
