//! The `Goal` contract and the `Calm` threat-gating decorator.

use crate::ResourceSet;

/// Static description of a goal, independent of any context type.
///
/// Split out of [`Goal`] so the selector can read names and control sets
/// without naming the context, which lets agents store goals behind a
/// higher-ranked trait object such as `dyn for<'a> Goal<Ctx<'a>>`.
pub trait GoalMeta {
    /// Short stable name used in logs and debug snapshots.
    fn name(&self) -> &'static str;

    /// Control resources this goal needs exclusively while running.
    ///
    /// Read once at registration; must not change afterwards.
    fn controls(&self) -> ResourceSet;
}

/// One prioritised behaviour of an agent.
///
/// The selector drives the lifecycle: `can_start` is polled while idle,
/// `start` runs once on activation, `tick` once per tick while active,
/// `should_continue` is polled every tick while active, and `stop` runs once
/// on deactivation.  `start` and `stop` always alternate.
///
/// All methods receive the agent's context `C` explicitly.  Goals keep only
/// their own bookkeeping (timers, attempt counters); everything they share
/// with sibling goals lives in the context.
///
/// # Example
///
/// ```rust,ignore
/// struct Idle;
///
/// impl GoalMeta for Idle {
///     fn name(&self) -> &'static str { "idle" }
///     fn controls(&self) -> ResourceSet { ResourceSet::LOCOMOTION }
/// }
///
/// impl Goal<MyCtx> for Idle {
///     fn can_start(&mut self, ctx: &mut MyCtx) -> bool { ctx.bored }
/// }
/// ```
pub trait Goal<C: ?Sized>: GoalMeta {
    /// Whether this goal wants to activate now.  May mutate goal-local
    /// cooldowns and shared context state.
    fn can_start(&mut self, ctx: &mut C) -> bool;

    /// Whether an active goal wants to keep running.
    ///
    /// Default: the same test as [`can_start`][Self::can_start].
    fn should_continue(&mut self, ctx: &mut C) -> bool {
        self.can_start(ctx)
    }

    fn start(&mut self, _ctx: &mut C) {}

    fn tick(&mut self, _ctx: &mut C) {}

    fn stop(&mut self, _ctx: &mut C) {}
}

/// Exposes whether the agent is currently provoked.
pub trait ThreatGate {
    fn is_threatened(&self) -> bool;
}

/// Wraps a goal so it can neither start nor continue while the context
/// reports a threat.
///
/// The inner goal's own tests are only consulted once the gate is clear, so
/// a gated goal never advances its cooldowns while the agent is provoked.
#[derive(Debug, Default, Clone)]
pub struct Calm<G>(pub G);

impl<G> Calm<G> {
    pub fn new(goal: G) -> Self {
        Self(goal)
    }

    pub fn inner(&self) -> &G {
        &self.0
    }

    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G: GoalMeta> GoalMeta for Calm<G> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn controls(&self) -> ResourceSet {
        self.0.controls()
    }
}

impl<C, G> Goal<C> for Calm<G>
where
    C: ?Sized + ThreatGate,
    G: Goal<C>,
{
    fn can_start(&mut self, ctx: &mut C) -> bool {
        !ctx.is_threatened() && self.0.can_start(ctx)
    }

    fn should_continue(&mut self, ctx: &mut C) -> bool {
        !ctx.is_threatened() && self.0.should_continue(ctx)
    }

    fn start(&mut self, ctx: &mut C) {
        self.0.start(ctx);
    }

    fn tick(&mut self, ctx: &mut C) {
        self.0.tick(ctx);
    }

    fn stop(&mut self, ctx: &mut C) {
        self.0.stop(ctx);
    }
}
