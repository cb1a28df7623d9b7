//! Card definitions - static card data.
//!
//! `CardDefinition` holds the identity a card arrives with from the input:
//! cost, printed attack and health, description, colors, and the name every
//! rule lookup keys on. Combat state (current health, frozen, ...) lives on
//! `Minion` and `Hero`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Color tags of a card. Almost always one to three entries.
pub type Colors = SmallVec<[String; 3]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use lane_duel::cards::CardDefinition;
///
/// let goliath = CardDefinition::minion("Goliath", 2, 1, 3)
///     .with_description("Taunts the enemy")
///     .with_colors(["Red"]);
///
/// assert_eq!(goliath.mana, 2);
/// assert_eq!(goliath.colors.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Cost to place the card (minion) or to use its power (hero).
    #[serde(default)]
    pub mana: i32,

    /// Printed attack. Ignored for heroes.
    #[serde(default)]
    pub attack_damage: i32,

    /// Printed health. Ignored for heroes, which start at the configured
    /// starting health.
    #[serde(default)]
    pub health: i32,

    /// Flavor text, reported verbatim.
    #[serde(default)]
    pub description: String,

    /// Color tags, reported verbatim.
    #[serde(default)]
    pub colors: Colors,

    /// Card name; the key for lanes, tanks, abilities and hero powers.
    pub name: String,
}

impl CardDefinition {
    /// Create a minion definition.
    #[must_use]
    pub fn minion(name: impl Into<String>, mana: i32, attack_damage: i32, health: i32) -> Self {
        Self {
            mana,
            attack_damage,
            health,
            description: String::new(),
            colors: Colors::new(),
            name: name.into(),
        }
    }

    /// Create a hero definition.
    #[must_use]
    pub fn hero(name: impl Into<String>, mana: i32) -> Self {
        Self::minion(name, mana, 0, 0)
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the colors (builder pattern).
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let card = CardDefinition::minion("Berserker", 1, 3, 2)
            .with_description("Charges in")
            .with_colors(["Red", "Black"]);

        assert_eq!(card.name, "Berserker");
        assert_eq!(card.attack_damage, 3);
        assert_eq!(card.health, 2);
        assert_eq!(card.description, "Charges in");
        assert_eq!(card.colors.as_slice(), ["Red", "Black"]);
    }

    #[test]
    fn test_deserialize_input_card() {
        let json = r#"{
            "mana": 2,
            "attackDamage": 4,
            "health": 1,
            "description": "A scary one",
            "colors": ["Blue"],
            "name": "The Ripper"
        }"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.mana, 2);
        assert_eq!(card.attack_damage, 4);
        assert_eq!(card.health, 1);
        assert_eq!(card.name, "The Ripper");
    }

    #[test]
    fn test_deserialize_hero_without_combat_stats() {
        let json = r#"{"mana": 2, "description": "x", "colors": [], "name": "King Mudface"}"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.attack_damage, 0);
        assert_eq!(card.health, 0);
        assert!(card.colors.is_empty());
    }
}
