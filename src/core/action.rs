//! Action records: one command for the turn engine.
//!
//! Actions arrive as JSON objects tagged by `command`, e.g.
//! `{"command": "placeCard", "handIdx": 0}`. Numeric fields a command
//! needs default to zero when absent, and unrecognized commands decode to
//! `Action::Unknown`, which the engine ignores.

use serde::{Deserialize, Serialize};

/// A board cell: `x` is the lane, `y` the slot within the lane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    /// Create coordinates for lane `x`, slot `y`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One symbolic action submitted by the driver.
///
/// ## Example
///
/// ```
/// use lane_duel::core::{Action, Coordinates};
///
/// let action: Action = serde_json::from_str(
///     r#"{"command": "cardUsesAttack",
///         "cardAttacker": {"x": 2, "y": 0},
///         "cardAttacked": {"x": 1, "y": 0}}"#,
/// ).unwrap();
///
/// assert_eq!(
///     action,
///     Action::CardUsesAttack {
///         card_attacker: Coordinates::new(2, 0),
///         card_attacked: Coordinates::new(1, 0),
///     }
/// );
/// assert_eq!(action.command(), "cardUsesAttack");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    // === Queries ===
    GetPlayerDeck {
        #[serde(default)]
        player_idx: i32,
    },
    GetPlayerHero {
        #[serde(default)]
        player_idx: i32,
    },
    GetPlayerTurn,
    GetPlayerMana {
        #[serde(default)]
        player_idx: i32,
    },
    GetCardsInHand {
        #[serde(default)]
        player_idx: i32,
    },
    GetCardsOnTable,
    GetCardAtPosition {
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
    },
    GetFrozenCardsOnTable,
    GetPlayerOneWins,
    GetPlayerTwoWins,
    GetTotalGamesPlayed,

    // === Commands ===
    PlaceCard {
        #[serde(default)]
        hand_idx: i32,
    },
    EndPlayerTurn,
    CardUsesAttack {
        #[serde(default)]
        card_attacker: Coordinates,
        #[serde(default)]
        card_attacked: Coordinates,
    },
    CardUsesAbility {
        #[serde(default)]
        card_attacker: Coordinates,
        #[serde(default)]
        card_attacked: Coordinates,
    },
    UseAttackHero {
        #[serde(default)]
        card_attacker: Coordinates,
    },
    UseHeroAbility {
        #[serde(default)]
        affected_row: i32,
    },

    /// Any command name the engine does not recognize.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// The command name as it appears in action and result records.
    #[must_use]
    pub fn command(&self) -> &'static str {
        match self {
            Action::GetPlayerDeck { .. } => "getPlayerDeck",
            Action::GetPlayerHero { .. } => "getPlayerHero",
            Action::GetPlayerTurn => "getPlayerTurn",
            Action::GetPlayerMana { .. } => "getPlayerMana",
            Action::GetCardsInHand { .. } => "getCardsInHand",
            Action::GetCardsOnTable => "getCardsOnTable",
            Action::GetCardAtPosition { .. } => "getCardAtPosition",
            Action::GetFrozenCardsOnTable => "getFrozenCardsOnTable",
            Action::GetPlayerOneWins => "getPlayerOneWins",
            Action::GetPlayerTwoWins => "getPlayerTwoWins",
            Action::GetTotalGamesPlayed => "getTotalGamesPlayed",
            Action::PlaceCard { .. } => "placeCard",
            Action::EndPlayerTurn => "endPlayerTurn",
            Action::CardUsesAttack { .. } => "cardUsesAttack",
            Action::CardUsesAbility { .. } => "cardUsesAbility",
            Action::UseAttackHero { .. } => "useAttackHero",
            Action::UseHeroAbility { .. } => "useHeroAbility",
            Action::Unknown => "unknown",
        }
    }

    /// Whether this action only reads state.
    #[must_use]
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Action::GetPlayerDeck { .. }
                | Action::GetPlayerHero { .. }
                | Action::GetPlayerTurn
                | Action::GetPlayerMana { .. }
                | Action::GetCardsInHand { .. }
                | Action::GetCardsOnTable
                | Action::GetCardAtPosition { .. }
                | Action::GetFrozenCardsOnTable
                | Action::GetPlayerOneWins
                | Action::GetPlayerTwoWins
                | Action::GetTotalGamesPlayed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Action {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(
            parse(r#"{"command": "getPlayerDeck", "playerIdx": 2}"#),
            Action::GetPlayerDeck { player_idx: 2 }
        );
        assert_eq!(parse(r#"{"command": "getPlayerTurn"}"#), Action::GetPlayerTurn);
        assert_eq!(
            parse(r#"{"command": "getCardAtPosition", "x": 3, "y": 1}"#),
            Action::GetCardAtPosition { x: 3, y: 1 }
        );
        assert_eq!(
            parse(r#"{"command": "getTotalGamesPlayed"}"#),
            Action::GetTotalGamesPlayed
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse(r#"{"command": "placeCard", "handIdx": 3}"#),
            Action::PlaceCard { hand_idx: 3 }
        );
        assert_eq!(parse(r#"{"command": "endPlayerTurn"}"#), Action::EndPlayerTurn);
        assert_eq!(
            parse(r#"{"command": "useHeroAbility", "affectedRow": 1}"#),
            Action::UseHeroAbility { affected_row: 1 }
        );
        assert_eq!(
            parse(r#"{"command": "useAttackHero", "cardAttacker": {"x": 2, "y": 4}}"#),
            Action::UseAttackHero {
                card_attacker: Coordinates::new(2, 4)
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        assert_eq!(
            parse(r#"{"command": "placeCard"}"#),
            Action::PlaceCard { hand_idx: 0 }
        );
        assert_eq!(
            parse(r#"{"command": "cardUsesAbility", "cardAttacker": {"x": 3, "y": 1}}"#),
            Action::CardUsesAbility {
                card_attacker: Coordinates::new(3, 1),
                card_attacked: Coordinates::default(),
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        let action = parse(r#"{"command": "castFireball", "handIdx": 1}"#);
        assert_eq!(action, Action::Unknown);
        assert!(!action.is_query());
    }

    #[test]
    fn test_command_names_round_trip() {
        let actions = [
            Action::GetPlayerMana { player_idx: 1 },
            Action::GetFrozenCardsOnTable,
            Action::GetPlayerOneWins,
            Action::CardUsesAttack {
                card_attacker: Coordinates::new(2, 0),
                card_attacked: Coordinates::new(1, 0),
            },
        ];

        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["command"], action.command());
        }
    }

    #[test]
    fn test_is_query() {
        assert!(Action::GetCardsOnTable.is_query());
        assert!(!Action::EndPlayerTurn.is_query());
        assert!(!Action::PlaceCard { hand_idx: 0 }.is_query());
    }
}
