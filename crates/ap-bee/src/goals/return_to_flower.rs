use ap_goal::{Goal, GoalMeta, ResourceSet};

use crate::{BeeConfig, BeeContext};

/// Fly back to the last pollinated flower after a long dry spell.
///
/// Flowers that are gone, too far away, or not reached within the budget
/// are forgotten.
pub struct ReturnToFlowerGoal {
    after_ticks:     u32,
    budget:          u32,
    arrive_distance: f64,
    memory_distance: f64,
    speed:           f64,

    ticks: u32,
}

impl ReturnToFlowerGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            after_ticks:     cfg.return_to_flower_after,
            budget:          cfg.return_to_flower_budget,
            arrive_distance: cfg.flower_arrive_distance,
            memory_distance: cfg.flower_memory_distance,
            speed:           cfg.fly_speed,
            ticks:           0,
        }
    }

    fn forget(ctx: &mut BeeContext<'_>, why: &str) {
        if let Some(flower) = ctx.state.remembered_flower.take() {
            log::debug!("bee {} forgot flower {flower}: {why}", ctx.id);
            ctx.state.counters.flowers_forgotten += 1;
        }
    }

    /// Whether the remembered flower is still worth flying to, forgetting it
    /// if not.
    fn still_wanted(&self, ctx: &mut BeeContext<'_>) -> bool {
        let Some(flower) = ctx.state.remembered_flower else {
            return false;
        };
        if !ctx.is_flower(flower) {
            Self::forget(ctx, "no longer a flower");
            return false;
        }
        if !ctx.pos.is_within(flower, self.memory_distance) {
            Self::forget(ctx, "too far away");
            return false;
        }
        !ctx.pos.is_within(flower, self.arrive_distance)
    }
}

impl GoalMeta for ReturnToFlowerGoal {
    fn name(&self) -> &'static str {
        "return_to_flower"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::LOCOMOTION
    }
}

impl<'a> Goal<BeeContext<'a>> for ReturnToFlowerGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        ctx.state.remembered_flower.is_some()
            && ctx.state.ticks_since_pollination > self.after_ticks
            && self.still_wanted(ctx)
    }

    fn should_continue(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        self.ticks <= self.budget && self.still_wanted(ctx)
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        self.ticks = 0;
        if let Some(flower) = ctx.state.remembered_flower {
            ctx.move_to(flower, self.speed);
        }
    }

    fn tick(&mut self, ctx: &mut BeeContext<'a>) {
        self.ticks += 1;
        if self.ticks > self.budget {
            Self::forget(ctx, "travel budget spent");
            ctx.nav.stop();
            return;
        }
        if let Some(flower) = ctx.state.remembered_flower {
            if ctx.nav.is_idle() {
                ctx.move_to(flower, self.speed);
            }
        }
    }

    fn stop(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.nav.stop();
    }
}
