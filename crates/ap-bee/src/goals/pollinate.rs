use ap_goal::{Goal, GoalMeta, ResourceSet};
use ap_world::{find_block, BlockKind};

use crate::{BeeConfig, BeeContext};

/// Find a nearby flower, fly to it, and linger until it yields a payload.
///
/// Every run is capped by a tick budget; whether it succeeds, gives up or
/// is interrupted, the next run waits out a cooldown.  An interrupted run
/// keeps its flower cached so the next one resumes it.
pub struct PollinateGoal {
    search_range: u32,
    miss_cooldown: (u32, u32),
    budget: u32,
    cooldown: u32,
    radius: f64,
    dwell: u32,
    speed: f64,

    ticks: u32,
    dwell_ticks: u32,
    completed: bool,
}

impl PollinateGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            search_range:  cfg.flower_search_range,
            miss_cooldown: (cfg.flower_miss_cooldown_min, cfg.flower_miss_cooldown_max),
            budget:        cfg.pollination_budget_ticks,
            cooldown:      cfg.pollination_cooldown_ticks,
            radius:        cfg.pollination_radius,
            dwell:         cfg.pollination_dwell_ticks,
            speed:         cfg.fly_speed,
            ticks:         0,
            dwell_ticks:   0,
            completed:     false,
        }
    }

    fn succeed(&mut self, ctx: &mut BeeContext<'_>) {
        let st = &mut *ctx.state;
        st.has_payload = true;
        st.ticks_since_pollination = 0;
        st.remembered_flower = st.flower_pos.take();
        st.counters.pollinations += 1;
        self.completed = true;
        log::trace!("bee {} pollinated {:?}", ctx.id, st.remembered_flower);
    }

    fn abandon(&mut self, ctx: &mut BeeContext<'_>) {
        if let Some(flower) = ctx.state.flower_pos.take() {
            log::debug!("bee {} gave up on flower {flower} after {} ticks", ctx.id, self.ticks);
        }
        ctx.state.counters.pollination_abandoned += 1;
        ctx.nav.stop();
    }
}

impl GoalMeta for PollinateGoal {
    fn name(&self) -> &'static str {
        "pollinate"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::LOCOMOTION
    }
}

impl<'a> Goal<BeeContext<'a>> for PollinateGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        if ctx.state.has_payload || ctx.state.ticks_until_can_pollinate > 0 {
            return false;
        }
        if let Some(flower) = ctx.state.flower_pos {
            if ctx.is_flower(flower) {
                return true;
            }
            ctx.state.flower_pos = None;
        }

        match find_block(ctx.world, ctx.pos, self.search_range, self.search_range, BlockKind::is_flower) {
            Some(flower) => {
                ctx.state.flower_pos = Some(flower);
                true
            }
            None => {
                let (lo, hi) = self.miss_cooldown;
                ctx.state.ticks_until_can_pollinate = ctx.rng.gen_range(lo..hi);
                ctx.state.counters.flower_search_misses += 1;
                false
            }
        }
    }

    fn should_continue(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        !self.completed
            && self.ticks <= self.budget
            && ctx.state.flower_pos.is_some_and(|f| ctx.is_flower(f))
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        self.ticks = 0;
        self.dwell_ticks = 0;
        self.completed = false;
        ctx.state.pollinating = true;
    }

    fn tick(&mut self, ctx: &mut BeeContext<'a>) {
        self.ticks += 1;
        if self.ticks > self.budget {
            self.abandon(ctx);
            return;
        }
        let Some(flower) = ctx.state.flower_pos else {
            return;
        };

        if ctx.pos.is_within(flower, self.radius) {
            ctx.nav.stop();
            self.dwell_ticks += 1;
            if self.dwell_ticks >= self.dwell {
                self.succeed(ctx);
            }
        } else if ctx.nav.is_idle() {
            ctx.move_to(flower, self.speed);
        }
    }

    fn stop(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.state.pollinating = false;
        ctx.state.ticks_until_can_pollinate = self.cooldown;
        ctx.nav.stop();
    }
}
