//! Hero runtime state.

use serde::{Deserialize, Serialize};

use super::catalog::HeroPower;
use super::definition::CardDefinition;

/// A player's hero. Never on the board; only `useAttackHero` damages it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    definition: CardDefinition,
    power: Option<HeroPower>,

    /// Current health. The game is decided once it reaches zero.
    pub health: i32,

    /// Set when the power is used; cleared at the round boundary.
    pub used_ability: bool,
}

impl Hero {
    /// Build a hero at `health`.
    #[must_use]
    pub fn new(definition: CardDefinition, health: i32) -> Self {
        let power = HeroPower::from_name(&definition.name);
        Self {
            definition,
            power,
            health,
            used_ability: false,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Mana cost of the power.
    #[must_use]
    pub fn mana(&self) -> i32 {
        self.definition.mana
    }

    /// The power, `None` for a name outside the catalog.
    #[must_use]
    pub fn power(&self) -> Option<HeroPower> {
        self.power
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
