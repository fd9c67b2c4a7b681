use ap_goal::{Goal, GoalMeta, ResourceSet};
use ap_world::PointOfInterest;

use crate::{BeeConfig, BeeContext};

/// One-shot query for the nearest home site with room, skipping sites on
/// the exclusion list.
///
/// When every candidate is excluded the list is cleared so the following
/// search can try them again.
pub struct LocateHomeGoal {
    cooldown:                 u32,
    radius:                   u32,
    max_ticks_without_nectar: u32,
}

impl LocateHomeGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            cooldown:                 cfg.home_search_cooldown_ticks,
            radius:                   cfg.home_search_radius,
            max_ticks_without_nectar: cfg.max_ticks_without_nectar,
        }
    }
}

impl GoalMeta for LocateHomeGoal {
    fn name(&self) -> &'static str {
        "locate_home"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::empty()
    }
}

impl<'a> Goal<BeeContext<'a>> for LocateHomeGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        ctx.state.ticks_until_home_search == 0
            && ctx.state.home_pos.is_none()
            && ctx.state.can_enter_home(self.max_ticks_without_nectar)
    }

    fn should_continue(&mut self, _ctx: &mut BeeContext<'a>) -> bool {
        false
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.state.ticks_until_home_search = self.cooldown;

        let excluded = &ctx.state.exclusion_list;
        let found = ctx.world.nearest_poi(ctx.pos, self.radius, &|poi: &PointOfInterest| {
            poi.has_space() && !excluded.contains(poi.pos)
        });

        match found {
            Some(home) => {
                log::trace!("bee {} found home {home}", ctx.id);
                ctx.state.home_pos = Some(home);
            }
            None if !ctx.state.exclusion_list.is_empty() => {
                log::debug!("bee {} found no usable home; clearing exclusion list", ctx.id);
                ctx.state.exclusion_list.clear();
            }
            None => {}
        }
    }
}
