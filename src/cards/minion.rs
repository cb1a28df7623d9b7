//! Minion runtime state.
//!
//! A `Minion` is one physical card of a deck. It keeps its definition for
//! reporting and carries the mutable combat state: current health and
//! attack, and the frozen / attacked / used-ability flags.

use serde::{Deserialize, Serialize};

use super::catalog::{MinionAbility, MinionKind};
use super::definition::CardDefinition;

/// A minion card, in a deck, a hand, or on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minion {
    definition: CardDefinition,
    kind: MinionKind,

    /// Current health. At or below zero only transiently: the action that
    /// caused it removes the minion from its lane.
    pub health: i32,

    /// Current attack.
    pub attack_damage: i32,

    /// Frozen minions can neither attack nor use abilities.
    pub frozen: bool,

    /// Set by an attack; cleared at the round boundary.
    pub attacked: bool,

    /// Set by an ability; cleared at the round boundary.
    pub used_ability: bool,

    /// Lane index, set on placement.
    row: Option<usize>,
}

impl Minion {
    /// Build a fresh minion from its definition.
    #[must_use]
    pub fn new(definition: CardDefinition) -> Self {
        let kind = MinionKind::from_name(&definition.name);
        Self {
            health: definition.health,
            attack_damage: definition.attack_damage,
            definition,
            kind,
            frozen: false,
            attacked: false,
            used_ability: false,
            row: None,
        }
    }

    /// The static definition.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn mana(&self) -> i32 {
        self.definition.mana
    }

    #[must_use]
    pub fn kind(&self) -> MinionKind {
        self.kind
    }

    #[must_use]
    pub fn is_tank(&self) -> bool {
        self.kind.is_tank()
    }

    #[must_use]
    pub fn ability(&self) -> Option<MinionAbility> {
        self.kind.ability()
    }

    /// Whether the minion has a catalog ability. Fixed at creation.
    #[must_use]
    pub fn has_ability(&self) -> bool {
        self.ability().is_some()
    }

    /// The lane the minion was placed in, `None` while in a deck or hand.
    #[must_use]
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub(crate) fn set_row(&mut self, row: usize) {
        self.row = Some(row);
    }

    /// Whether the minion has spent its action this round.
    #[must_use]
    pub fn has_acted(&self) -> bool {
        self.attacked || self.used_ability
    }

    /// Whether the minion is at or below zero health.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Clear the per-round attacked and used-ability flags.
    pub fn reset_round_flags(&mut self) {
        self.attacked = false;
        self.used_ability = false;
    }
}
