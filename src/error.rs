//! Error types.
//!
//! `DuelError` covers fatal problems at the loading boundary. Rule
//! violations are not fatal: they become `error` fields in result records
//! and the run continues, so they live in their own type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck index {index} out of range for player {player} ({available} decks)")]
    DeckIndex {
        player: u8,
        index: usize,
        available: usize,
    },

    #[error("Starting player must be 1 or 2, got {0}")]
    StartingPlayer(u8),

    #[error("Player index must be 1 or 2, got {0}")]
    PlayerIndex(u8),
}

pub type Result<T> = std::result::Result<T, DuelError>;

/// A rejected action. The `Display` text is the message reported to the
/// driver.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Card not found in hand.")]
    CardNotInHand,

    #[error("Not enough mana to place card on table.")]
    NotEnoughManaForCard,

    #[error("Invalid row index for card placement. Row: -1")]
    NoLaneForCard,

    #[error("Cannot place card on table since row is full.")]
    LaneFull,

    #[error("Attacked card does not belong to the enemy.")]
    TargetNotEnemy,

    #[error("Attacked card does not belong to the current player.")]
    TargetNotAlly,

    #[error("Attacker card has already attacked this turn.")]
    AlreadyActed,

    #[error("Attacker card is frozen.")]
    Frozen,

    #[error("Attacked card is not of type 'Tank'.")]
    TankFirst,

    #[error("Not enough mana to use hero's ability.")]
    NotEnoughManaForPower,

    #[error("Hero has already attacked this turn.")]
    PowerUsed,

    #[error("Selected row does not belong to the enemy.")]
    RowNotEnemy,

    #[error("Selected row does not belong to the current player.")]
    RowNotAlly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            RuleViolation::TankFirst.to_string(),
            "Attacked card is not of type 'Tank'."
        );
        assert_eq!(
            RuleViolation::NoLaneForCard.to_string(),
            "Invalid row index for card placement. Row: -1"
        );
        assert_eq!(
            RuleViolation::RowNotAlly.to_string(),
            "Selected row does not belong to the current player."
        );
    }

    #[test]
    fn test_duel_error_display() {
        let err = DuelError::DeckIndex {
            player: 2,
            index: 4,
            available: 3,
        };
        assert_eq!(err.to_string(), "Deck index 4 out of range for player 2 (3 decks)");
        assert_eq!(
            DuelError::StartingPlayer(0).to_string(),
            "Starting player must be 1 or 2, got 0"
        );
        assert_eq!(
            DuelError::PlayerIndex(3).to_string(),
            "Player index must be 1 or 2, got 3"
        );
    }
}
