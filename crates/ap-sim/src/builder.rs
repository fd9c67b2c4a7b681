//! Fluent builder for constructing a [`Sim`].

use ap_bee::{Bee, BeeConfig};
use ap_core::{AgentId, AgentRng, BlockPos, SimConfig, Tick};
use ap_world::{GridNavigator, World};

use crate::{Sim, SimError, SimResult};

/// Default distance within which a struck bee rallies its neighbours.
pub const DEFAULT_ALERT_RADIUS: f64 = 8.0;

/// Default navigator path length before the range multiplier applies.
pub const DEFAULT_FOLLOW_RANGE: u32 = 16;

/// Fluent builder for [`Sim<W>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, thread count, snapshot interval
/// - `W: World` — the block world bees live in
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                  |
/// |----------------------|--------------------------|
/// | `.bee_config(c)`     | `BeeConfig::default()`   |
/// | `.spawn(p)`          | no bees                  |
/// | `.alert_radius(r)`   | `DEFAULT_ALERT_RADIUS`   |
/// | `.follow_range(n)`   | `DEFAULT_FOLLOW_RANGE`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world)
///     .spawns(hive_entrances)
///     .alert_radius(12.0)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<W: World> {
    config:       SimConfig,
    world:        W,
    bee_config:   BeeConfig,
    spawns:       Vec<BlockPos>,
    alert_radius: f64,
    follow_range: u32,
}

impl<W: World> SimBuilder<W> {
    pub fn new(config: SimConfig, world: W) -> Self {
        Self {
            config,
            world,
            bee_config:   BeeConfig::default(),
            spawns:       Vec::new(),
            alert_radius: DEFAULT_ALERT_RADIUS,
            follow_range: DEFAULT_FOLLOW_RANGE,
        }
    }

    pub fn bee_config(mut self, cfg: BeeConfig) -> Self {
        self.bee_config = cfg;
        self
    }

    /// Add one bee at `pos`.  Bees get `AgentId`s in spawn order.
    pub fn spawn(mut self, pos: BlockPos) -> Self {
        self.spawns.push(pos);
        self
    }

    pub fn spawns(mut self, positions: impl IntoIterator<Item = BlockPos>) -> Self {
        self.spawns.extend(positions);
        self
    }

    pub fn alert_radius(mut self, radius: f64) -> Self {
        self.alert_radius = radius;
        self
    }

    pub fn follow_range(mut self, cells: u32) -> Self {
        self.follow_range = cells;
        self
    }

    /// Validate inputs, create the bees, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<W>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.bee_config.validate()?;
        if self.alert_radius.is_nan() || self.alert_radius < 0.0 {
            return Err(SimError::Config(format!(
                "alert_radius must be non-negative, got {}",
                self.alert_radius
            )));
        }
        self.config.validate()?;

        // ── Spawn bees ────────────────────────────────────────────────────
        let mut bees = Vec::with_capacity(self.spawns.len());
        for (i, &pos) in self.spawns.iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many bees ({})", self.spawns.len())))?;
            bees.push(Bee::new(
                id,
                pos,
                GridNavigator::new(self.follow_range),
                AgentRng::new(self.config.seed, id),
                &self.bee_config,
            )?);
        }
        log::debug!("built simulation with {} bees", bees.len());

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Sim {
            config:       self.config,
            current_tick: Tick::ZERO,
            world:        self.world,
            bees,
            alert_radius: self.alert_radius,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
