//! `GoalSelector` — per-agent priority arbitration over exclusive controls.

use ap_core::GoalId;

use crate::{
    ControlResource, Goal, GoalError, GoalMeta, GoalResult, NoopSelectorObserver, ResourceSet,
    SelectorObserver,
};

// ── Entries ───────────────────────────────────────────────────────────────────

struct GoalEntry<G: ?Sized> {
    id:       GoalId,
    priority: i32,
    controls: ResourceSet,
    active:   bool,
    goal:     Box<G>,
}

/// Read-only view of one registered goal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GoalStatus {
    pub id:       GoalId,
    pub name:     &'static str,
    pub priority: i32,
    pub controls: Vec<ControlResource>,
    pub active:   bool,
}

/// Counts of lifecycle transitions performed by one [`GoalSelector::tick`].
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct SelectorTick {
    pub stopped: usize,
    pub started: usize,
    pub ticked:  usize,
}

// ── GoalSelector ──────────────────────────────────────────────────────────────

/// Ordered collection of goals with per-tick arbitration.
///
/// Lower `priority` values win.  Goals with equal priority are considered in
/// registration order.  A running goal is never preempted by a higher-priority
/// goal; it keeps its controls until its own `should_continue` fails, a
/// control it holds is disabled, or it is removed.
///
/// `G` is usually a trait object such as `dyn Goal<Ctx>`.  The context type
/// only appears on the methods that call into goals.
pub struct GoalSelector<G: ?Sized> {
    /// Sorted by `(priority, registration order)`.
    entries:  Vec<GoalEntry<G>>,
    next_id:  u32,
    disabled: ResourceSet,
}

impl<G: ?Sized> Default for GoalSelector<G> {
    fn default() -> Self {
        Self {
            entries:  Vec::new(),
            next_id:  0,
            disabled: ResourceSet::empty(),
        }
    }
}

impl<G: ?Sized + GoalMeta> GoalSelector<G> {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register `goal` at `priority` and return its handle.  The goal starts
    /// inactive.
    pub fn add_goal(&mut self, priority: i32, goal: Box<G>) -> GoalId {
        let id = GoalId(self.next_id);
        self.next_id += 1;

        let controls = goal.controls();
        let at = self.entries.partition_point(|e| e.priority <= priority);
        log::trace!("registering goal {} ({}) at priority {priority}", id, goal.name());
        self.entries.insert(at, GoalEntry {
            id,
            priority,
            controls,
            active: false,
            goal,
        });
        id
    }

    /// Unregister a goal, stopping it first if it is running.
    pub fn remove_goal<C: ?Sized>(&mut self, id: GoalId, ctx: &mut C) -> GoalResult<Box<G>>
    where
        G: Goal<C>,
    {
        let at = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(GoalError::UnknownGoal(id))?;
        let mut entry = self.entries.remove(at);
        if entry.active {
            entry.goal.stop(ctx);
        }
        Ok(entry.goal)
    }

    // ── Control masking ───────────────────────────────────────────────────

    /// Forbid `resource`.  A running goal that holds it is stopped on the
    /// next tick; no goal needing it may start until it is re-enabled.
    pub fn disable_control(&mut self, resource: ControlResource) {
        self.disabled |= resource.flag();
    }

    pub fn enable_control(&mut self, resource: ControlResource) {
        self.disabled.remove(resource.flag());
    }

    pub fn disabled_controls(&self) -> ResourceSet {
        self.disabled
    }

    // ── Arbitration ───────────────────────────────────────────────────────

    /// Run one arbitration pass: stop, then start, then tick.
    pub fn tick<C: ?Sized>(&mut self, ctx: &mut C) -> SelectorTick
    where
        G: Goal<C>,
    {
        self.tick_with(ctx, &mut NoopSelectorObserver)
    }

    /// [`tick`][Self::tick] with lifecycle callbacks.
    pub fn tick_with<C, O>(&mut self, ctx: &mut C, observer: &mut O) -> SelectorTick
    where
        C: ?Sized,
        O: SelectorObserver + ?Sized,
        G: Goal<C>,
    {
        let mut summary = SelectorTick::default();
        let disabled = self.disabled;

        // 1. Release controls of goals that no longer want to run.
        for entry in self.entries.iter_mut().filter(|e| e.active) {
            let keep = !entry.controls.intersects(disabled) && entry.goal.should_continue(ctx);
            if !keep {
                entry.goal.stop(ctx);
                entry.active = false;
                summary.stopped += 1;
                log::trace!("goal {} ({}) stopped", entry.id, entry.goal.name());
                observer.on_stop(entry.id, entry.goal.name());
            }
        }

        // 2. Start idle goals in priority order, reserving controls as we go.
        let mut held = disabled | self.active_controls();
        for entry in self.entries.iter_mut() {
            if entry.active || entry.controls.intersects(held) {
                continue;
            }
            if entry.goal.can_start(ctx) {
                entry.goal.start(ctx);
                entry.active = true;
                held |= entry.controls;
                summary.started += 1;
                log::trace!("goal {} ({}) started", entry.id, entry.goal.name());
                observer.on_start(entry.id, entry.goal.name());
            }
        }
        debug_assert!(self.is_exclusive(), "two running goals share a control");

        // 3. Tick every running goal once.
        for entry in self.entries.iter_mut().filter(|e| e.active) {
            entry.goal.tick(ctx);
            summary.ticked += 1;
            observer.on_tick(entry.id, entry.goal.name());
        }

        summary
    }

    /// Stop every running goal, in priority order.
    pub fn stop_all<C: ?Sized>(&mut self, ctx: &mut C)
    where
        G: Goal<C>,
    {
        for entry in self.entries.iter_mut().filter(|e| e.active) {
            entry.goal.stop(ctx);
            entry.active = false;
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Union of the controls held by running goals.
    pub fn active_controls(&self) -> ResourceSet {
        self.entries
            .iter()
            .filter(|e| e.active)
            .fold(ResourceSet::empty(), |acc, e| acc | e.controls)
    }

    pub fn is_running(&self, id: GoalId) -> bool {
        self.entries.iter().any(|e| e.id == id && e.active)
    }

    /// Ids of running goals in priority order.
    pub fn running(&self) -> impl Iterator<Item = GoalId> + '_ {
        self.entries.iter().filter(|e| e.active).map(|e| e.id)
    }

    /// Names of running goals in priority order.
    pub fn running_names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.goal.name())
            .collect()
    }

    /// Status of every registered goal in priority order.
    pub fn statuses(&self) -> Vec<GoalStatus> {
        self.entries
            .iter()
            .map(|e| GoalStatus {
                id:       e.id,
                name:     e.goal.name(),
                priority: e.priority,
                controls: e.controls.resources().collect(),
                active:   e.active,
            })
            .collect()
    }

    /// Whether no control is held by more than one running goal.
    pub fn is_exclusive(&self) -> bool {
        let mut seen = ResourceSet::empty();
        for e in self.entries.iter().filter(|e| e.active) {
            if seen.intersects(e.controls) {
                return false;
            }
            seen |= e.controls;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
