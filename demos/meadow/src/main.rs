//! meadow — small demo for the apiary bee framework.
//!
//! A hive sits above a patch of flowers.  Six bees forage, carry nectar
//! home, and wander.  Halfway through, a bear swipes at one of them: the
//! struck bee rallies its neighbours and they all go after the attacker.
//!
//! Usage: `meadow [world.csv] [bee_config.json]`.  Without arguments the
//! world below is used with the default bee configuration.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ap_bee::{Bee, BeeConfig};
use ap_core::{AgentId, BlockPos, SimConfig, Tick, time::secs};
use ap_sim::{SimBuilder, SimObserver, TickStats};
use ap_world::{BlockKind, GridWorld, load_world_csv, load_world_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const SIM_SECONDS:       u32 = 300;
const SNAPSHOT_SECONDS:  u32 = 60;
const BEAR:              BlockPos = BlockPos::new(4, 0, -6);

// ── Embedded world ────────────────────────────────────────────────────────────

// A stone floor at y = -1, a hive on a post, and two flower beds.
const WORLD_CSV: &str = "\
x,y,z,kind,capacity\n\
0,0,0,solid,\n\
0,1,0,solid,\n\
0,2,0,hive,4\n\
6,0,2,flower,\n\
7,0,2,flower,\n\
6,0,3,flower,\n\
7,0,3,flower,\n\
-5,0,-4,flower,\n\
-6,0,-4,flower,\n\
-5,0,-5,flower,\n\
";

fn spawn_points() -> Vec<BlockPos> {
    vec![
        BlockPos::new(1, 2, 0),
        BlockPos::new(-1, 2, 0),
        BlockPos::new(0, 2, 1),
        BlockPos::new(0, 2, -1),
        BlockPos::new(1, 3, 1),
        BlockPos::new(-1, 3, -1),
    ]
}

fn build_world(csv: Option<&str>) -> Result<GridWorld> {
    let mut world = match csv {
        Some(path) => load_world_csv(Path::new(path))?,
        None => load_world_reader(Cursor::new(WORLD_CSV))?,
    };
    world.fill(BlockPos::new(-12, -1, -12), BlockPos::new(12, -1, 12), BlockKind::Solid);
    Ok(world)
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints alerts and per-bee JSON snapshots, and tallies goal activity.
#[derive(Default)]
struct ReportObserver {
    started: usize,
    stopped: usize,
    alerted: usize,
}

impl SimObserver for ReportObserver {
    fn on_alert(&mut self, tick: Tick, from: AgentId, attacker: BlockPos) {
        println!("[{tick}] {from} raised the alarm: attacker at {attacker}");
    }

    fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
        self.started += stats.started;
        self.stopped += stats.stopped;
        self.alerted += stats.alerted;
    }

    fn on_snapshot(&mut self, tick: Tick, bees: &[Bee]) {
        println!("── snapshot at {tick} ──");
        for bee in bees {
            match serde_json::to_string(&bee.debug_snapshot()) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("{}: snapshot failed: {e}", bee.id()),
            }
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!();
        println!("Finished at {final_tick}");
        println!(
            "Goal starts: {}  |  goal stops: {}  |  bees alerted: {}",
            self.started, self.stopped, self.alerted
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    println!("=== meadow — apiary bee demo ===");
    println!("Bees: {}  |  Seconds: {SIM_SECONDS}  |  Seed: {SEED}", spawn_points().len());
    println!();

    // 1. World and bee configuration.
    let world = build_world(args.first().map(String::as_str))?;
    println!("World: {} blocks, {} hives", world.block_count(), world.pois().len());

    let bee_config = match args.get(1) {
        Some(path) => BeeConfig::from_json_path(Path::new(path))?,
        None => BeeConfig::default(),
    };

    // 2. Sim config.
    let config = SimConfig {
        total_ticks:             secs(SIM_SECONDS) as u64,
        seed:                    SEED,
        num_threads:             None,
        snapshot_interval_ticks: secs(SNAPSHOT_SECONDS) as u64,
    };
    let half = config.total_ticks / 2;

    // 3. Build.
    let mut sim = SimBuilder::new(config, world)
        .bee_config(bee_config)
        .spawns(spawn_points())
        .build()?;

    // 4. Run: forage, get hit, finish.
    let mut observer = ReportObserver::default();
    let t0 = Instant::now();

    sim.run_ticks(half, &mut observer)?;
    println!("[{}] the bear swipes at {}", sim.current_tick, AgentId(0));
    sim.strike(AgentId(0), BEAR)?;
    sim.run(&mut observer)?;

    println!("Wall time: {:.2?}", t0.elapsed());

    // 5. Final tallies.
    println!();
    for bee in &sim.bees {
        let c = &bee.state().counters;
        println!(
            "{}: pollinations {}  deliveries {}  stings {}  misses {}",
            bee.id(),
            c.pollinations,
            c.deliveries,
            c.stings,
            c.flower_search_misses
        );
    }

    Ok(())
}
