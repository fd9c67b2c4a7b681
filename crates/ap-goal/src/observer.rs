//! Lifecycle callbacks emitted by [`GoalSelector::tick_with`][crate::GoalSelector::tick_with].

use ap_core::GoalId;

/// Receives goal lifecycle transitions in the order the selector performs
/// them.  All methods default to no-ops.
pub trait SelectorObserver {
    fn on_start(&mut self, _id: GoalId, _name: &'static str) {}

    fn on_stop(&mut self, _id: GoalId, _name: &'static str) {}

    fn on_tick(&mut self, _id: GoalId, _name: &'static str) {}
}

/// A [`SelectorObserver`] that does nothing.
pub struct NoopSelectorObserver;

impl SelectorObserver for NoopSelectorObserver {}

/// One recorded lifecycle transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GoalEvent {
    Started(GoalId),
    Stopped(GoalId),
    Ticked(GoalId),
}

/// Records every transition; two selectors driven identically produce equal
/// transcripts.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Transcript {
    pub events: Vec<GoalEvent>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SelectorObserver for Transcript {
    fn on_start(&mut self, id: GoalId, _name: &'static str) {
        self.events.push(GoalEvent::Started(id));
    }

    fn on_stop(&mut self, id: GoalId, _name: &'static str) {
        self.events.push(GoalEvent::Stopped(id));
    }

    fn on_tick(&mut self, id: GoalId, _name: &'static str) {
        self.events.push(GoalEvent::Ticked(id));
    }
}
