use ap_core::BlockPos;
use ap_goal::{Goal, GoalMeta, ResourceSet};

use crate::{BeeConfig, BeeContext};

/// Idle flight to a random open cell, pulled toward home when the bee has
/// strayed far from it.
pub struct WanderGoal {
    chance:        f64,
    horizontal:    i32,
    vertical:      i32,
    attempts:      u32,
    bias_distance: f64,
    speed:         f64,

    target: Option<BlockPos>,
}

impl WanderGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            chance:        cfg.wander_chance,
            horizontal:    cfg.wander_horizontal,
            vertical:      cfg.wander_vertical,
            attempts:      cfg.wander_attempts,
            bias_distance: cfg.wander_home_bias_distance,
            speed:         cfg.fly_speed,
            target:        None,
        }
    }

    fn pick_target(&self, ctx: &mut BeeContext<'_>) -> Option<BlockPos> {
        let h = self.horizontal;
        let center = match ctx.state.home_pos {
            Some(home) if !ctx.pos.is_within(home, self.bias_distance) => ctx.pos.offset(
                (home.x - ctx.pos.x).clamp(-h, h),
                0,
                (home.z - ctx.pos.z).clamp(-h, h),
            ),
            _ => ctx.pos,
        };

        for _ in 0..self.attempts {
            let dx = ctx.rng.offset(h);
            let dy = ctx.rng.offset(self.vertical);
            let dz = ctx.rng.offset(h);
            let cell = center.offset(dx, dy, dz);
            if cell != ctx.pos && ctx.world.block_at(cell).is_passable() {
                return Some(cell);
            }
        }
        None
    }
}

impl GoalMeta for WanderGoal {
    fn name(&self) -> &'static str {
        "wander"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::LOCOMOTION
    }
}

impl<'a> Goal<BeeContext<'a>> for WanderGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        if !ctx.nav.is_idle() || !ctx.rng.gen_bool(self.chance) {
            return false;
        }
        self.target = self.pick_target(ctx);
        self.target.is_some()
    }

    fn should_continue(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        ctx.nav.is_following_path()
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        if let Some(target) = self.target.take() {
            ctx.move_to(target, self.speed);
        }
    }

    fn stop(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.nav.stop();
    }
}
