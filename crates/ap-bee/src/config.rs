//! Tunable constants for the standard bee goal set.
//!
//! Every value is in ticks or blocks.  [`BeeConfig::default`] gives the
//! reference behaviour; JSON files may override any subset of fields.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use ap_core::time::secs;

use crate::{BeeError, BeeResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeeConfig {
    // ── Pollination ──────────────────────────────────────────────────────
    /// Ring-scan range (horizontal and vertical) when looking for flowers.
    pub flower_search_range:        u32,
    /// Cooldown after a scan that found nothing, drawn from `[min, max)`.
    pub flower_miss_cooldown_min:   u32,
    pub flower_miss_cooldown_max:   u32,
    pub pollination_budget_ticks:   u32,
    /// Cooldown applied whenever a pollination run ends.
    pub pollination_cooldown_ticks: u32,
    pub pollination_radius:         f64,
    pub pollination_dwell_ticks:    u32,

    // ── Home ─────────────────────────────────────────────────────────────
    pub home_search_cooldown_ticks: u32,
    pub home_search_radius:         u32,
    pub home_entry_distance:        f64,
    pub home_travel_budget_ticks:   u32,
    pub near_home_distance:         f64,
    pub max_home_distance:          f64,
    pub far_range_multiplier:       f32,
    /// Far travel gives up after this many ticks without getting closer.
    pub home_stall_ticks:           u32,
    pub enter_home_cooldown_ticks:  u32,
    /// A bee without payload still heads home after this long.
    pub max_ticks_without_nectar:   u32,

    // ── Threat ───────────────────────────────────────────────────────────
    pub anger_min_ticks:            u32,
    pub anger_max_ticks:            u32,
    pub sting_distance:             f64,

    // ── Wandering / memory ───────────────────────────────────────────────
    pub wander_chance:              f64,
    pub wander_horizontal:          i32,
    pub wander_vertical:            i32,
    pub wander_attempts:            u32,
    /// Wander targets are pulled toward home beyond this distance.
    pub wander_home_bias_distance:  f64,
    pub return_to_flower_after:     u32,
    pub return_to_flower_budget:    u32,
    pub flower_arrive_distance:     f64,
    pub flower_memory_distance:     f64,

    // ── Movement ─────────────────────────────────────────────────────────
    pub fly_speed:                  f64,
    pub chase_speed:                f64,
}

impl Default for BeeConfig {
    fn default() -> Self {
        Self {
            flower_search_range:        5,
            flower_miss_cooldown_min:   20,
            flower_miss_cooldown_max:   60,
            pollination_budget_ticks:   secs(30),
            pollination_cooldown_ticks: secs(10),
            pollination_radius:         1.0,
            pollination_dwell_ticks:    secs(1),

            home_search_cooldown_ticks: secs(10),
            home_search_radius:         20,
            home_entry_distance:        2.0,
            home_travel_budget_ticks:   secs(30),
            near_home_distance:         16.0,
            max_home_distance:          32.0,
            far_range_multiplier:       10.0,
            home_stall_ticks:           secs(3),
            enter_home_cooldown_ticks:  secs(20),
            max_ticks_without_nectar:   secs(180),

            anger_min_ticks:            secs(20),
            anger_max_ticks:            secs(39),
            sting_distance:             1.0,

            wander_chance:              0.1,
            wander_horizontal:          8,
            wander_vertical:            3,
            wander_attempts:            10,
            wander_home_bias_distance:  22.0,
            return_to_flower_after:     secs(120),
            return_to_flower_budget:    secs(30),
            flower_arrive_distance:     2.0,
            flower_memory_distance:     32.0,

            fly_speed:                  1.0,
            chase_speed:                1.0,
        }
    }
}

impl BeeConfig {
    /// Reject values the goals cannot work with.
    pub fn validate(&self) -> BeeResult<()> {
        let problem = if self.flower_miss_cooldown_min >= self.flower_miss_cooldown_max {
            Some("flower_miss_cooldown_min must be below flower_miss_cooldown_max")
        } else if self.anger_min_ticks > self.anger_max_ticks {
            Some("anger_min_ticks must not exceed anger_max_ticks")
        } else if self.anger_min_ticks == 0 {
            Some("anger_min_ticks must be positive")
        } else if !(0.0..=1.0).contains(&self.wander_chance) {
            Some("wander_chance must lie in [0, 1]")
        } else if self.near_home_distance > self.max_home_distance {
            Some("near_home_distance must not exceed max_home_distance")
        } else if self.fly_speed <= 0.0 || self.chase_speed <= 0.0 {
            Some("speeds must be positive")
        } else if self.far_range_multiplier < 1.0 {
            Some("far_range_multiplier must be at least 1")
        } else if self.pollination_budget_ticks == 0
            || self.home_travel_budget_ticks == 0
            || self.return_to_flower_budget == 0
        {
            Some("travel budgets must be positive")
        } else if self.wander_horizontal < 0 || self.wander_vertical < 0 {
            Some("wander ranges must not be negative")
        } else {
            None
        };

        match problem {
            Some(msg) => {
                log::warn!("rejecting bee configuration: {msg}");
                Err(BeeError::Config(msg.to_owned()))
            }
            None => Ok(()),
        }
    }

    /// Parse a JSON object; missing fields take their default values.
    pub fn from_json_reader<R: Read>(reader: R) -> BeeResult<Self> {
        let cfg: BeeConfig = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> BeeResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}
