//! `Bee<N>` — one agent: position, shared state, navigator, RNG and goals.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use ap_core::{AgentId, AgentRng, BlockPos, Tick};
use ap_goal::{Goal, GoalSelector, GoalStatus, NoopSelectorObserver, SelectorObserver, SelectorTick};
use ap_world::{GridNavigator, Navigator, World};

use crate::goals::standard_goals;
use crate::{BeeConfig, BeeContext, BeeResult, BeeState, ExclusionList, FailureCounters};

/// Goal trait object stored by a bee's selector.
pub type BeeGoal = dyn for<'a> Goal<BeeContext<'a>> + Send;

/// Generic key/value map used for saving and restoring bee state.
pub type Compound = serde_json::Map<String, Value>;

// ── Persistence keys ──────────────────────────────────────────────────────────

const KEY_HOME_POS:                &str = "HomePos";
const KEY_FLOWER_POS:              &str = "FlowerPos";
const KEY_REMEMBERED_FLOWER:       &str = "RememberedFlower";
const KEY_HAS_PAYLOAD:             &str = "HasPayload";
const KEY_HAS_STUNG:               &str = "HasStung";
const KEY_TICKS_SINCE_POLLINATION: &str = "TicksSincePollination";
const KEY_CANNOT_ENTER_HOME_TICKS: &str = "CannotEnterHomeTicks";
const KEY_THREAT_TICKS:            &str = "ThreatTicks";
const KEY_THREAT_TARGET:           &str = "ThreatTarget";
const KEY_EXCLUSION_LIST:          &str = "ExclusionList";

fn put<T: Serialize>(tag: &mut Compound, key: &str, value: &T) -> BeeResult<()> {
    tag.insert(key.to_owned(), serde_json::to_value(value)?);
    Ok(())
}

fn get<T: DeserializeOwned>(tag: &Compound, key: &str) -> BeeResult<Option<T>> {
    match tag.get(key) {
        Some(v) => Ok(Some(serde_json::from_value(v.clone())?)),
        None => Ok(None),
    }
}

// ── Debug snapshot ────────────────────────────────────────────────────────────

/// Serializable view of a bee for debugging tools.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BeeDebug {
    pub id:                        AgentId,
    pub pos:                       BlockPos,
    pub goals:                     Vec<GoalStatus>,
    pub home_pos:                  Option<BlockPos>,
    pub flower_pos:                Option<BlockPos>,
    pub remembered_flower:         Option<BlockPos>,
    pub exclusion_list:            Vec<BlockPos>,
    pub counters:                  FailureCounters,
    pub has_payload:               bool,
    pub has_been_struck:           bool,
    pub has_stung:                 bool,
    pub threat_ticks:              u32,
    pub threat_target:             Option<BlockPos>,
    pub ticks_since_pollination:   u32,
    pub ticks_until_can_pollinate: u32,
    pub ticks_until_home_search:   u32,
    pub cannot_enter_home_ticks:   u32,
}

// ── Bee ───────────────────────────────────────────────────────────────────────

pub struct Bee<N: Navigator = GridNavigator> {
    id:       AgentId,
    pos:      BlockPos,
    state:    BeeState,
    nav:      N,
    rng:      AgentRng,
    selector: GoalSelector<BeeGoal>,
}

impl<N: Navigator> Bee<N> {
    /// A bee running the standard goal set.  Fails if `cfg` does not
    /// [`validate`][BeeConfig::validate].
    pub fn new(id: AgentId, pos: BlockPos, nav: N, rng: AgentRng, cfg: &BeeConfig) -> BeeResult<Self> {
        cfg.validate()?;
        let mut bee = Self::bare(id, pos, nav, rng);
        for (priority, goal) in standard_goals(cfg) {
            bee.selector.add_goal(priority, goal);
        }
        Ok(bee)
    }

    /// A bee with no goals; register them through [`selector_mut`][Self::selector_mut].
    pub fn bare(id: AgentId, pos: BlockPos, nav: N, rng: AgentRng) -> Self {
        Self {
            id,
            pos,
            state: BeeState::default(),
            nav,
            rng,
            selector: GoalSelector::new(),
        }
    }

    // ── Per-tick driver ───────────────────────────────────────────────────

    /// Advance timers, arbitrate goals, then move along the current path.
    pub fn tick(&mut self, world: &dyn World, tick: Tick) -> SelectorTick {
        self.tick_with(world, tick, &mut NoopSelectorObserver)
    }

    pub fn tick_with<O>(&mut self, world: &dyn World, tick: Tick, observer: &mut O) -> SelectorTick
    where
        O: SelectorObserver + ?Sized,
    {
        self.state.tick_timers();

        let mut ctx = BeeContext {
            id:    self.id,
            tick,
            pos:   self.pos,
            state: &mut self.state,
            nav:   &mut self.nav,
            world,
            rng:   &mut self.rng,
        };
        let summary = self.selector.tick_with(&mut ctx, observer);

        self.pos = self.nav.advance(world, self.pos);
        summary
    }

    // ── External events ───────────────────────────────────────────────────

    /// Record a hit from an attacker standing at `from`.
    pub fn strike(&mut self, from: BlockPos) {
        self.state.has_been_struck = true;
        self.state.struck_by = Some(from);
    }

    /// A neighbour reports an attacker at `from`.  Ignored by bees that have
    /// already stung or are busy with a threat of their own.
    pub fn alert(&mut self, from: BlockPos) {
        if !self.state.has_stung && self.state.threat_target.is_none() {
            self.state.alerted_by = Some(from);
        }
    }

    /// Attacker position to broadcast to neighbours, if a strike raised one.
    pub fn take_pending_alert(&mut self) -> Option<BlockPos> {
        self.state.pending_alert.take()
    }

    /// Stop every running goal and drop any path.
    pub fn halt(&mut self, world: &dyn World, tick: Tick) {
        let mut ctx = BeeContext {
            id:    self.id,
            tick,
            pos:   self.pos,
            state: &mut self.state,
            nav:   &mut self.nav,
            world,
            rng:   &mut self.rng,
        };
        self.selector.stop_all(&mut ctx);
        self.nav.stop();
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Save the persistent part of the shared state.  Goals and selector
    /// state are not saved; they rebuild from the restored state.
    pub fn save(&self) -> BeeResult<Compound> {
        let st = &self.state;
        let mut tag = Compound::new();
        if let Some(p) = st.home_pos {
            put(&mut tag, KEY_HOME_POS, &p)?;
        }
        if let Some(p) = st.flower_pos {
            put(&mut tag, KEY_FLOWER_POS, &p)?;
        }
        if let Some(p) = st.remembered_flower {
            put(&mut tag, KEY_REMEMBERED_FLOWER, &p)?;
        }
        if let Some(p) = st.threat_target {
            put(&mut tag, KEY_THREAT_TARGET, &p)?;
        }
        put(&mut tag, KEY_HAS_PAYLOAD, &st.has_payload)?;
        put(&mut tag, KEY_HAS_STUNG, &st.has_stung)?;
        put(&mut tag, KEY_TICKS_SINCE_POLLINATION, &st.ticks_since_pollination)?;
        put(&mut tag, KEY_CANNOT_ENTER_HOME_TICKS, &st.cannot_enter_home_ticks)?;
        put(&mut tag, KEY_THREAT_TICKS, &st.threat_ticks)?;
        put(&mut tag, KEY_EXCLUSION_LIST, &st.exclusion_list)?;
        Ok(tag)
    }

    /// Restore state saved by [`save`][Self::save].  Missing keys take
    /// their defaults; a malformed value leaves the bee untouched.
    pub fn load(&mut self, tag: &Compound) -> BeeResult<()> {
        let home_pos = get(tag, KEY_HOME_POS)?;
        let flower_pos = get(tag, KEY_FLOWER_POS)?;
        let remembered_flower = get(tag, KEY_REMEMBERED_FLOWER)?;
        let threat_target = get(tag, KEY_THREAT_TARGET)?;
        let has_payload = get(tag, KEY_HAS_PAYLOAD)?.unwrap_or(false);
        let has_stung = get(tag, KEY_HAS_STUNG)?.unwrap_or(false);
        let ticks_since_pollination = get(tag, KEY_TICKS_SINCE_POLLINATION)?.unwrap_or(0);
        let cannot_enter_home_ticks = get(tag, KEY_CANNOT_ENTER_HOME_TICKS)?.unwrap_or(0);
        let threat_ticks = get(tag, KEY_THREAT_TICKS)?.unwrap_or(0);
        let exclusion_list: ExclusionList = get(tag, KEY_EXCLUSION_LIST)?.unwrap_or_default();

        let st = &mut self.state;
        st.home_pos = home_pos;
        st.flower_pos = flower_pos;
        st.remembered_flower = remembered_flower;
        st.threat_target = threat_target;
        st.has_payload = has_payload;
        st.has_stung = has_stung;
        st.ticks_since_pollination = ticks_since_pollination;
        st.cannot_enter_home_ticks = cannot_enter_home_ticks;
        st.threat_ticks = threat_ticks;
        st.exclusion_list = exclusion_list;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn debug_snapshot(&self) -> BeeDebug {
        let st = &self.state;
        BeeDebug {
            id:                        self.id,
            pos:                       self.pos,
            goals:                     self.selector.statuses(),
            home_pos:                  st.home_pos,
            flower_pos:                st.flower_pos,
            remembered_flower:         st.remembered_flower,
            exclusion_list:            st.exclusion_list.iter().collect(),
            counters:                  st.counters,
            has_payload:               st.has_payload,
            has_been_struck:           st.has_been_struck,
            has_stung:                 st.has_stung,
            threat_ticks:              st.threat_ticks,
            threat_target:             st.threat_target,
            ticks_since_pollination:   st.ticks_since_pollination,
            ticks_until_can_pollinate: st.ticks_until_can_pollinate,
            ticks_until_home_search:   st.ticks_until_home_search,
            cannot_enter_home_ticks:   st.cannot_enter_home_ticks,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    pub fn set_pos(&mut self, pos: BlockPos) {
        self.pos = pos;
    }

    pub fn state(&self) -> &BeeState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BeeState {
        &mut self.state
    }

    pub fn navigator(&self) -> &N {
        &self.nav
    }

    pub fn selector(&self) -> &GoalSelector<BeeGoal> {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut GoalSelector<BeeGoal> {
        &mut self.selector
    }

    /// Names of the goals running after the last tick, in priority order.
    pub fn running_goals(&self) -> Vec<&'static str> {
        self.selector.running_names()
    }
}
