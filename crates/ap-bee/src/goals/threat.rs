//! Retaliation: pick up an attacker, then chase and sting it.
//!
//! Both goals share the bee's threat timer.  While it runs every calm goal
//! stays suppressed; stinging or the timer running out ends the episode.

use ap_core::BlockPos;
use ap_goal::{Goal, GoalMeta, ResourceSet};

use crate::{BeeConfig, BeeContext};

// ── AcquireThreatGoal ─────────────────────────────────────────────────────────

/// Turns a strike or a neighbour's alert into a threat target and arms the
/// threat timer.  Direct strikes also raise an alert for nearby bees.
pub struct AcquireThreatGoal {
    anger_min: u32,
    anger_max: u32,
}

impl AcquireThreatGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            anger_min: cfg.anger_min_ticks,
            anger_max: cfg.anger_max_ticks,
        }
    }

    fn provoke(&self, ctx: &mut BeeContext<'_>, target: BlockPos, direct: bool) {
        ctx.state.threat_target = Some(target);
        ctx.state.threat_ticks = ctx.rng.gen_range(self.anger_min..=self.anger_max);
        if direct {
            ctx.state.pending_alert = Some(target);
        }
        log::trace!(
            "bee {} provoked by {target} for {} ticks (direct: {direct})",
            ctx.id,
            ctx.state.threat_ticks
        );
    }
}

impl GoalMeta for AcquireThreatGoal {
    fn name(&self) -> &'static str {
        "acquire_threat"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::TARGET_ACQUISITION
    }
}

impl<'a> Goal<BeeContext<'a>> for AcquireThreatGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        !ctx.state.has_stung && (ctx.state.struck_by.is_some() || ctx.state.alerted_by.is_some())
    }

    fn should_continue(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        ctx.state.threat_ticks > 0 && ctx.state.threat_target.is_some()
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        if let Some(attacker) = ctx.state.struck_by.take() {
            ctx.state.has_been_struck = false;
            ctx.state.alerted_by = None;
            self.provoke(ctx, attacker, true);
        } else if let Some(attacker) = ctx.state.alerted_by.take() {
            self.provoke(ctx, attacker, false);
        }
    }

    fn tick(&mut self, ctx: &mut BeeContext<'a>) {
        // A fresh strike while provoked retargets and re-arms the timer.
        if let Some(attacker) = ctx.state.struck_by.take() {
            ctx.state.has_been_struck = false;
            self.provoke(ctx, attacker, true);
        }
        ctx.state.alerted_by = None;
    }

    fn stop(&mut self, ctx: &mut BeeContext<'a>) {
        if ctx.state.threat_ticks == 0 {
            ctx.state.threat_target = None;
        }
    }
}

// ── ThreatResponseGoal ────────────────────────────────────────────────────────

/// Chases the threat target and stings it once in reach.
pub struct ThreatResponseGoal {
    sting_distance: f64,
    speed:          f64,
}

impl ThreatResponseGoal {
    pub fn new(cfg: &BeeConfig) -> Self {
        Self {
            sting_distance: cfg.sting_distance,
            speed:          cfg.chase_speed,
        }
    }
}

impl GoalMeta for ThreatResponseGoal {
    fn name(&self) -> &'static str {
        "threat_response"
    }

    fn controls(&self) -> ResourceSet {
        ResourceSet::LOCOMOTION | ResourceSet::GAZE
    }
}

impl<'a> Goal<BeeContext<'a>> for ThreatResponseGoal {
    fn can_start(&mut self, ctx: &mut BeeContext<'a>) -> bool {
        ctx.state.is_threatened() && ctx.state.threat_target.is_some() && !ctx.state.has_stung
    }

    fn start(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.nav.stop();
    }

    fn tick(&mut self, ctx: &mut BeeContext<'a>) {
        let Some(target) = ctx.state.threat_target else {
            return;
        };

        if ctx.pos.is_within(target, self.sting_distance) {
            let st = &mut *ctx.state;
            st.has_stung = true;
            st.threat_ticks = 0;
            st.threat_target = None;
            st.counters.stings += 1;
            ctx.nav.stop();
            log::debug!("bee {} stung {target}", ctx.id);
        } else if ctx.nav.is_idle() {
            ctx.move_to(target, self.speed);
        }
    }

    fn stop(&mut self, ctx: &mut BeeContext<'a>) {
        ctx.nav.stop();
    }
}
