use ap_core::BlockPos;
use ap_goal::{Goal, GoalMeta, ResourceSet};

use crate::{BeeConfig, BeeContext};

/// Fly to the known home site.
///
/// Close homes get a direct path that must reach the site.  Distant homes
/// use a coarse long-range path and are given up once the bee stops getting
/// closer.  Homes that fail either way, or that fill up before the bee gets
/// in, are exclusion-listed; homes beyond `max_distance` are simply
/// forgotten.
pub struct MoveToHomeGoal {
    budget:                   u32,
    near_distance:            f64,
    max_distance:             f64,
    far_multiplier:           f32,
    stall_limit:              u32,
    entry_distance:           f64,
    search_cooldown:          u32,
    max_ticks_without_nectar: u32,
    speed:                    f64,

    ticks:         u32,
    best_distance: f64,
    stalled:       u32,
}

impl MoveToHomeGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            budget:                   cfg.home_travel_budget_ticks,
            near_distance:            cfg.near_home_distance,
            max_distance:             cfg.max_home_distance,
            far_multiplier:           cfg.far_range_multiplier,
            stall_limit:              cfg.home_stall_ticks,
            entry_distance:           cfg.home_entry_distance,
            search_cooldown:          cfg.home_search_cooldown_ticks,
            max_ticks_without_nectar: cfg.max_ticks_without_nectar,
            speed:                    cfg.fly_speed,
            ticks:                    0,
            best_distance:            f64::INFINITY,
            stalled:                  0,
        }
    }

    fn reset_run(&mut self) {
        self.ticks = 0;
        self.best_distance = f64::INFINITY;
        self.stalled = 0;
    }

    /// Exclusion-list `home`, forget it, and delay the next search.
    fn exclude(&self, ctx: &mut BeeContext<'_>, home: BlockPos) {
        let st = &mut *ctx.state;
        st.exclusion_list.push(home);
        st.home_pos = None;
        st.ticks_until_home_search = self.search_cooldown;
    }

    fn abandon(&mut self, ctx: &mut BeeContext<'_>, home: BlockPos, reason: &str) {
        log::debug!("bee {} abandoned home {home}: {reason}", ctx.id);
        self.exclude(ctx, home);
        ctx.state.counters.homes_unreachable += 1;
        ctx.nav.stop();
    }

    /// Drop `home` if it filled up while the bee wants in.  Returns `true`
    /// when the home was released.
    fn release_if_full(&self, ctx: &mut BeeContext<'_>, home: BlockPos) -> bool {
        if ctx.is_home_with_space(home) || !ctx.state.can_enter_home(self.max_ticks_without_nectar) {
            return false;
        }
        log::debug!("bee {} released full home {home}", ctx.id);
        self.exclude(ctx, home);
        ctx.state.counters.homes_full += 1;
        true
    }

    fn travel_near(&mut self, ctx: &mut BeeContext<'_>, home: BlockPos) {
        ctx.nav.reset_range_multiplier();
        if ctx.nav.is_idle() {
            ctx.move_to(home, self.speed);
            if !ctx.nav.current_path_reaches_target() {
                self.abandon(ctx, home, "no direct path");
            }
        }
    }

    fn travel_far(&mut self, ctx: &mut BeeContext<'_>, home: BlockPos, distance: f64) {
        ctx.nav.set_range_multiplier(self.far_multiplier);
        if ctx.nav.is_idle() {
            ctx.move_to(home, self.speed);
        }

        if distance < self.best_distance {
            self.best_distance = distance;
            self.stalled = 0;
        } else {
            self.stalled += 1;
            if self.stalled > self.stall_limit {
                self.abandon(ctx, home, "no progress");
            }
        }
    }
}

impl GoalMeta for MoveToHomeGoal {
    fn name(&self) -> &'static str {
        "move_to_home"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::LOCOMOTION
    }
}

impl<'a> Goal<BeeContext<'a>> for MoveToHomeGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        let Some(home) = ctx.state.home_pos else {
            return false;
        };
        if ctx.world.poi_at(home).is_none() {
            log::debug!("bee {} forgot vanished home {home}", ctx.id);
            ctx.state.home_pos = None;
            return false;
        }
        if self.release_if_full(ctx, home) {
            return false;
        }
        ctx.state.can_enter_home(self.max_ticks_without_nectar)
            && !ctx.pos.is_within(home, self.entry_distance)
    }

    fn should_continue(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        let Some(home) = ctx.state.home_pos else {
            return false;
        };
        !self.release_if_full(ctx, home)
            && ctx.state.can_enter_home(self.max_ticks_without_nectar)
            && !ctx.pos.is_within(home, self.entry_distance)
    }

    fn start(&mut self, _ctx: &mut BeeContext<'a>) {
        self.reset_run();
    }

    fn tick(&mut self, ctx: &mut BeeContext<'a>) {
        let Some(home) = ctx.state.home_pos else {
            return;
        };
        self.ticks += 1;
        if self.ticks > self.budget {
            self.abandon(ctx, home, "travel budget spent");
            return;
        }

        let distance = ctx.pos.distance(home);
        if distance <= self.near_distance {
            self.travel_near(ctx, home);
        } else if distance > self.max_distance {
            log::debug!("bee {} is lost; {home} is {distance:.1} blocks away", ctx.id);
            ctx.state.home_pos = None;
            ctx.state.counters.homes_lost += 1;
            ctx.nav.stop();
        } else {
            self.travel_far(ctx, home, distance);
        }
    }

    fn stop(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.nav.stop();
        ctx.nav.reset_range_multiplier();
        self.reset_run();
    }
}
