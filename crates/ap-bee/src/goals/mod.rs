//! The standard bee goal set.
//!
//! | Priority | Goal                  | Controls                 | Gated by `Calm` |
//! |----------|-----------------------|--------------------------|-----------------|
//! | 0        | `ThreatResponseGoal`  | Locomotion, Gaze         | no              |
//! | 1        | `AcquireThreatGoal`   | TargetAcquisition        | no              |
//! | 2        | `EnterHomeGoal`       | Locomotion               | yes             |
//! | 3        | `PollinateGoal`       | Locomotion               | yes             |
//! | 4        | `LocateHomeGoal`      | none                     | yes             |
//! | 5        | `MoveToHomeGoal`      | Locomotion               | yes             |
//! | 6        | `ReturnToFlowerGoal`  | Locomotion               | yes             |
//! | 7        | `WanderGoal`          | Locomotion               | yes             |

mod enter_home;
mod locate_home;
mod move_to_home;
mod pollinate;
mod return_to_flower;
mod threat;
mod wander;

pub use enter_home::EnterHomeGoal;
pub use locate_home::LocateHomeGoal;
pub use move_to_home::MoveToHomeGoal;
pub use pollinate::PollinateGoal;
pub use return_to_flower::ReturnToFlowerGoal;
pub use threat::{AcquireThreatGoal, ThreatResponseGoal};
pub use wander::WanderGoal;

use ap_goal::Calm;

use crate::{BeeConfig, BeeGoal};

pub const THREAT_RESPONSE_PRIORITY:  i32 = 0;
pub const ACQUIRE_THREAT_PRIORITY:   i32 = 1;
pub const ENTER_HOME_PRIORITY:       i32 = 2;
pub const POLLINATE_PRIORITY:        i32 = 3;
pub const LOCATE_HOME_PRIORITY:      i32 = 4;
pub const MOVE_TO_HOME_PRIORITY:     i32 = 5;
pub const RETURN_TO_FLOWER_PRIORITY: i32 = 6;
pub const WANDER_PRIORITY:           i32 = 7;

/// Build the standard goal set as `(priority, goal)` pairs.
pub fn standard_goals(cfg: &BeeConfig) -> Vec<(i32, Box<BeeGoal>)> {
    let goals: [(i32, Box<BeeGoal>); 8] = [
        (THREAT_RESPONSE_PRIORITY,  Box::new(ThreatResponseGoal::new(cfg))),
        (ACQUIRE_THREAT_PRIORITY,   Box::new(AcquireThreatGoal::new(cfg))),
        (ENTER_HOME_PRIORITY,       Box::new(Calm::new(EnterHomeGoal::new(cfg)))),
        (POLLINATE_PRIORITY,        Box::new(Calm::new(PollinateGoal::new(cfg)))),
        (LOCATE_HOME_PRIORITY,      Box::new(Calm::new(LocateHomeGoal::new(cfg)))),
        (MOVE_TO_HOME_PRIORITY,     Box::new(Calm::new(MoveToHomeGoal::new(cfg)))),
        (RETURN_TO_FLOWER_PRIORITY, Box::new(Calm::new(ReturnToFlowerGoal::new(cfg)))),
        (WANDER_PRIORITY,           Box::new(Calm::new(WanderGoal::new(cfg)))),
    ];
    goals.into()
}
