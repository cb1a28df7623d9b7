//! Rules configuration.
//!
//! Every numeric constant the turn engine consumes comes from
//! `RulesConfig`. The defaults are the standard duel; a session can load
//! overrides from JSON, with missing keys keeping their defaults.

use serde::{Deserialize, Serialize};

/// Tunable rule constants.
///
/// ## Example
///
/// ```
/// use lane_duel::core::RulesConfig;
///
/// let config = RulesConfig::default().with_starting_health(20);
/// assert_eq!(config.starting_health, 20);
/// assert_eq!(config.lane_capacity, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesConfig {
    /// Hero health at the start of every game.
    pub starting_health: i32,

    /// Mana each player holds at the start of every game.
    pub starting_mana: i32,

    /// Upper bound on the mana gained at a round boundary.
    ///
    /// Only the per-round gain is capped, not the pool.
    pub mana_gain_cap: i32,

    /// Maximum number of minions in one lane.
    pub lane_capacity: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            starting_mana: 1,
            mana_gain_cap: 10,
            lane_capacity: 5,
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting hero health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the starting mana.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: i32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Set the per-round mana gain cap.
    #[must_use]
    pub fn with_mana_gain_cap(mut self, cap: i32) -> Self {
        self.mana_gain_cap = cap;
        self
    }

    /// Set the lane capacity.
    #[must_use]
    pub fn with_lane_capacity(mut self, capacity: usize) -> Self {
        self.lane_capacity = capacity;
        self
    }

    /// Mana both players gain when `round` begins.
    #[must_use]
    pub fn mana_gain(&self, round: u32) -> i32 {
        i32::try_from(round)
            .unwrap_or(i32::MAX)
            .min(self.mana_gain_cap)
    }
}
