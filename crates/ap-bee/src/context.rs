//! `BeeContext<'a>` — what a bee lends its goals for one selector call.

use ap_core::{AgentId, AgentRng, BlockPos, Tick};
use ap_goal::ThreatGate;
use ap_world::{Navigator, World};

use crate::BeeState;

/// Mutable view of one bee plus read-only access to the world.
///
/// Built fresh by [`Bee::tick`][crate::Bee::tick] every tick and dropped
/// before the bee moves, so no goal can hold on to it.
pub struct BeeContext<'a> {
    pub id:    AgentId,
    pub tick:  Tick,
    /// Position at the start of this tick.
    pub pos:   BlockPos,
    pub state: &'a mut BeeState,
    pub nav:   &'a mut dyn Navigator,
    pub world: &'a dyn World,
    pub rng:   &'a mut AgentRng,
}

impl BeeContext<'_> {
    /// Request a path from the current position to `target`.
    pub fn move_to(&mut self, target: BlockPos, speed: f64) {
        self.nav.start_moving_to(self.world, self.pos, target, speed);
    }

    /// `true` if `pos` holds a home site with room for another bee.
    pub fn is_home_with_space(&self, pos: BlockPos) -> bool {
        self.world.poi_at(pos).is_some_and(|poi| poi.has_space())
    }

    #[inline]
    pub fn is_flower(&self, pos: BlockPos) -> bool {
        self.world.block_at(pos).is_flower()
    }
}

impl ThreatGate for BeeContext<'_> {
    fn is_threatened(&self) -> bool {
        self.state.is_threatened()
    }
}
