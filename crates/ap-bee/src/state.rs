//! State shared by every goal of one bee.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use ap_core::BlockPos;

/// Home sites that recently failed, most recent last.
///
/// Holds at most [`ExclusionList::CAPACITY`] entries; pushing a new site
/// evicts the oldest, pushing a listed site moves it to the back.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<BlockPos>", into = "Vec<BlockPos>")]
pub struct ExclusionList {
    sites: VecDeque<BlockPos>,
}

impl ExclusionList {
    pub const CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, site: BlockPos) {
        if let Some(i) = self.sites.iter().position(|&s| s == site) {
            self.sites.remove(i);
        } else if self.sites.len() == Self::CAPACITY {
            self.sites.pop_front();
        }
        self.sites.push_back(site);
    }

    pub fn contains(&self, site: BlockPos) -> bool {
        self.sites.contains(&site)
    }

    pub fn clear(&mut self) {
        self.sites.clear();
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.sites.iter().copied()
    }
}

impl FromIterator<BlockPos> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = BlockPos>>(iter: I) -> Self {
        let mut list = ExclusionList::new();
        for site in iter {
            list.push(site);
        }
        list
    }
}

impl From<Vec<BlockPos>> for ExclusionList {
    fn from(sites: Vec<BlockPos>) -> Self {
        sites.into_iter().collect()
    }
}

impl From<ExclusionList> for Vec<BlockPos> {
    fn from(list: ExclusionList) -> Self {
        list.sites.into()
    }
}

/// How often each kind of goal failure or success happened.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCounters {
    pub flower_search_misses:  u32,
    pub pollination_abandoned: u32,
    pub pollinations:          u32,
    pub homes_unreachable:     u32,
    pub homes_lost:            u32,
    pub homes_full:            u32,
    pub deliveries:            u32,
    pub stings:                u32,
    pub flowers_forgotten:     u32,
}

/// Everything the goals of one bee read and write between them.
///
/// Owned by the bee and lent to goals through a context for one call at a
/// time; goals never keep references into it.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct BeeState {
    /// Flower the current or next pollination run targets.
    pub flower_pos:                Option<BlockPos>,
    /// Last flower successfully pollinated.
    pub remembered_flower:         Option<BlockPos>,
    pub home_pos:                  Option<BlockPos>,
    pub ticks_since_pollination:   u32,
    pub ticks_until_can_pollinate: u32,
    pub ticks_until_home_search:   u32,
    pub cannot_enter_home_ticks:   u32,
    pub exclusion_list:            ExclusionList,

    /// Remaining provoked ticks; every calm goal is suppressed while non-zero.
    pub threat_ticks:              u32,
    pub threat_target:             Option<BlockPos>,
    /// Set by a direct strike, consumed when the threat is acquired.
    pub struck_by:                 Option<BlockPos>,
    /// Set by a neighbour's alert, consumed when the threat is acquired.
    pub alerted_by:                Option<BlockPos>,
    /// Attacker position the simulation should broadcast to neighbours.
    pub pending_alert:             Option<BlockPos>,

    pub has_payload:               bool,
    /// A strike is waiting to be picked up by the threat goals.
    pub has_been_struck:           bool,
    pub has_stung:                 bool,
    pub pollinating:               bool,

    pub counters:                  FailureCounters,
}

impl BeeState {
    /// Advance every timer by one tick.  Countdowns stop at zero.
    pub fn tick_timers(&mut self) {
        self.ticks_since_pollination = self.ticks_since_pollination.saturating_add(1);
        self.ticks_until_can_pollinate = self.ticks_until_can_pollinate.saturating_sub(1);
        self.ticks_until_home_search = self.ticks_until_home_search.saturating_sub(1);
        self.cannot_enter_home_ticks = self.cannot_enter_home_ticks.saturating_sub(1);
        self.threat_ticks = self.threat_ticks.saturating_sub(1);
    }

    #[inline]
    pub fn is_threatened(&self) -> bool {
        self.threat_ticks > 0
    }

    /// Whether the bee is in a mood to go home: it carries pollen, or has
    /// gone `max_ticks_without_nectar` without any, and nothing else holds it.
    pub fn can_enter_home(&self, max_ticks_without_nectar: u32) -> bool {
        self.cannot_enter_home_ticks == 0
            && !self.pollinating
            && !self.has_stung
            && self.threat_target.is_none()
            && (self.has_payload || self.ticks_since_pollination > max_ticks_without_nectar)
    }
}
