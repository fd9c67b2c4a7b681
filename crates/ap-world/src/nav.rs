//! The `Navigator` service goals issue movement requests to.
//!
//! Goals only request paths and poll them; they never move the agent
//! themselves.  The owning agent calls [`Navigator::advance`] once per tick
//! after its goals ran, and the returned cell becomes its new position.
//!
//! [`GridNavigator`] is a deliberately small reference implementation: it
//! greedily steps one cell toward the target per unit of speed, side-steps
//! along single axes around obstacles, and gives up after
//! `follow_range × range_multiplier` cells.  A path that gives up early is
//! still followed but reports `reaches_target == false`.

use ap_core::BlockPos;

use crate::World;

/// Path-following service consumed by goals.
pub trait Navigator: Send {
    /// Plan a path from `from` to `target` and start following it at `speed`
    /// cells per tick.  Replaces any current path.
    fn start_moving_to(&mut self, world: &dyn World, from: BlockPos, target: BlockPos, speed: f64);

    /// `true` while a path is being followed.
    fn is_following_path(&self) -> bool;

    /// `true` when there is nothing left to follow.
    fn is_idle(&self) -> bool {
        !self.is_following_path()
    }

    /// Drop the current path.
    fn stop(&mut self);

    /// `true` if the current path ends at its requested target.
    fn current_path_reaches_target(&self) -> bool;

    /// Scale how far paths may search (coarse long-distance travel).
    fn set_range_multiplier(&mut self, multiplier: f32);

    fn reset_range_multiplier(&mut self);

    /// Move along the current path for one tick and return the new position.
    fn advance(&mut self, world: &dyn World, pos: BlockPos) -> BlockPos;
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// A planned sequence of cells, excluding the start cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub cells:          Vec<BlockPos>,
    pub target:         BlockPos,
    pub reaches_target: bool,
    /// Index of the next cell to enter.
    next: usize,
}

impl Path {
    pub fn is_finished(&self) -> bool {
        self.next >= self.cells.len()
    }

    /// The final cell of the path, or `None` for an empty path.
    pub fn end(&self) -> Option<BlockPos> {
        self.cells.last().copied()
    }
}

// ── GridNavigator ─────────────────────────────────────────────────────────────

/// Greedy straight-line navigator over a block grid.
#[derive(Clone, Debug)]
pub struct GridNavigator {
    follow_range:     u32,
    range_multiplier: f32,
    speed:            f64,
    /// Fractional cells carried between ticks for speeds below 1.
    carry:            f64,
    path:             Option<Path>,
}

impl GridNavigator {
    /// Navigator whose default path length is `follow_range` cells.
    pub fn new(follow_range: u32) -> Self {
        Self {
            follow_range,
            range_multiplier: 1.0,
            speed:            1.0,
            carry:            0.0,
            path:             None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn range_multiplier(&self) -> f32 {
        self.range_multiplier
    }

    fn max_path_len(&self) -> usize {
        (self.follow_range as f32 * self.range_multiplier).max(1.0) as usize
    }

    /// Greedy plan: diagonal step first, then single-axis steps.
    fn plan(&self, world: &dyn World, from: BlockPos, target: BlockPos) -> Path {
        let mut cells = Vec::new();
        let mut cur = from;
        let limit = self.max_path_len();

        while cur != target && cells.len() < limit {
            let Some(next) = next_step(world, cur, target, &cells) else {
                break;
            };
            cells.push(next);
            cur = next;
        }

        Path { reaches_target: cur == target, cells, target, next: 0 }
    }
}

impl Default for GridNavigator {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Pick the next cell from `cur` toward `target`, or `None` if boxed in.
///
/// The target cell itself is always enterable so paths may end inside a
/// solid home block.
fn next_step(world: &dyn World, cur: BlockPos, target: BlockPos, taken: &[BlockPos]) -> Option<BlockPos> {
    let diagonal = cur.step_toward(target);
    let dx = (target.x - cur.x).signum();
    let dy = (target.y - cur.y).signum();
    let dz = (target.z - cur.z).signum();
    let candidates = [
        diagonal,
        cur.offset(dx, 0, 0),
        cur.offset(0, 0, dz),
        cur.offset(0, dy, 0),
        // climb over low obstacles
        cur.offset(dx, 1, dz),
        cur.offset(0, 1, 0),
    ];
    candidates.into_iter().find(|&c| {
        c != cur
            && !taken.contains(&c)
            && (c == target || world.block_at(c).is_passable())
    })
}

impl Navigator for GridNavigator {
    fn start_moving_to(&mut self, world: &dyn World, from: BlockPos, target: BlockPos, speed: f64) {
        self.speed = speed.max(0.0);
        self.carry = 0.0;
        self.path = Some(self.plan(world, from, target));
    }

    fn is_following_path(&self) -> bool {
        self.path.as_ref().is_some_and(|p| !p.is_finished())
    }

    fn stop(&mut self) {
        self.path = None;
        self.carry = 0.0;
    }

    fn current_path_reaches_target(&self) -> bool {
        self.path.as_ref().is_some_and(|p| p.reaches_target)
    }

    fn set_range_multiplier(&mut self, multiplier: f32) {
        self.range_multiplier = multiplier.max(0.0);
    }

    fn reset_range_multiplier(&mut self) {
        self.range_multiplier = 1.0;
    }

    fn advance(&mut self, world: &dyn World, mut pos: BlockPos) -> BlockPos {
        let Some(path) = self.path.as_mut() else {
            return pos;
        };

        self.carry += self.speed;
        while self.carry >= 1.0 && !path.is_finished() {
            let next = path.cells[path.next];
            // The world may have changed since planning.
            if next != path.target && !world.block_at(next).is_passable() {
                log::trace!("path blocked at {next}; dropping");
                self.path = None;
                self.carry = 0.0;
                return pos;
            }
            pos = next;
            path.next += 1;
            self.carry -= 1.0;
        }

        if path.is_finished() {
            self.path = None;
            self.carry = 0.0;
        }
        pos
    }
}
