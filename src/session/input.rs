//! The input file: deck pools, per-game startup records and action lists.

use serde::{Deserialize, Serialize};

use crate::cards::CardDefinition;
use crate::core::{Action, PlayerId, PlayerMap};
use crate::error::{DuelError, Result};
use crate::rules::GameSetup;

/// One player's pool of decks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecksInput {
    /// Declared deck size. Informational; the deck lists are authoritative.
    pub nr_cards_in_deck: usize,
    /// Declared deck count. Informational.
    pub nr_decks: usize,
    pub decks: Vec<Vec<CardDefinition>>,
}

/// The startup record of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameInput {
    pub player_one_deck_idx: usize,
    pub player_two_deck_idx: usize,
    pub shuffle_seed: i64,
    pub player_one_hero: CardDefinition,
    pub player_two_hero: CardDefinition,
    pub starting_player: u8,
}

/// One game: how to start it and what to do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub start_game: StartGameInput,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// A whole input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFile {
    pub player_one_decks: DecksInput,
    pub player_two_decks: DecksInput,
    #[serde(default)]
    pub games: Vec<GameInput>,
}

impl InputFile {
    /// Parse an input file from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve a startup record into a `GameSetup`, copying the chosen
    /// decks.
    pub fn setup(&self, start: &StartGameInput) -> Result<GameSetup> {
        let starting_player = PlayerId::from_index(i64::from(start.starting_player))
            .ok_or(DuelError::StartingPlayer(start.starting_player))?;

        let deck_of = |player: PlayerId, pool: &DecksInput, index: usize| {
            pool.decks.get(index).cloned().ok_or(DuelError::DeckIndex {
                player: player.index(),
                index,
                available: pool.decks.len(),
            })
        };
        let one = deck_of(PlayerId::ONE, &self.player_one_decks, start.player_one_deck_idx)?;
        let two = deck_of(PlayerId::TWO, &self.player_two_decks, start.player_two_deck_idx)?;

        Ok(GameSetup {
            decks: PlayerMap::from_pair(one, two),
            heroes: PlayerMap::from_pair(
                start.player_one_hero.clone(),
                start.player_two_hero.clone(),
            ),
            seed: start.shuffle_seed,
            starting_player,
        })
    }
}
