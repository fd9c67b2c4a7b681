use ap_goal::{Goal, GoalMeta, ResourceSet};

use crate::{BeeConfig, BeeContext};

/// One-shot visit to the home site once the bee is at its entrance.
///
/// Deposits any payload and keeps the bee out for a while afterwards.
pub struct EnterHomeGoal {
    entry_distance:           f64,
    cooldown:                 u32,
    max_ticks_without_nectar: u32,
}

impl EnterHomeGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            entry_distance:           cfg.home_entry_distance,
            cooldown:                 cfg.enter_home_cooldown_ticks,
            max_ticks_without_nectar: cfg.max_ticks_without_nectar,
        }
    }
}

impl GoalMeta for EnterHomeGoal {
    fn name(&self) -> &'static str {
        "enter_home"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::LOCOMOTION
    }
}

impl<'a> Goal<BeeContext<'a>> for EnterHomeGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        let Some(home) = ctx.state.home_pos else {
            return false;
        };
        ctx.state.can_enter_home(self.max_ticks_without_nectar)
            && ctx.pos.is_within(home, self.entry_distance)
            && ctx.is_home_with_space(home)
    }

    fn should_continue(&mut self, _ctx: &mut BeeContext<'a>) -> bool {
        false
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        let st = &mut *ctx.state;
        if st.has_payload {
            st.has_payload = false;
            st.counters.deliveries += 1;
        }
        st.cannot_enter_home_ticks = self.cooldown;
        ctx.nav.stop();
        log::trace!("bee {} visited home {:?}", ctx.id, ctx.state.home_pos);
    }
}
