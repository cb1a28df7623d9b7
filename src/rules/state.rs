//! Game state for one duel.
//!
//! ## Turns and rounds
//!
//! A turn is one player's action window; a round is both players taking
//! one turn each. `end_turn` unfreezes the lanes of the player whose turn
//! is ending, then hands the turn over. Every second turn closes the round:
//!
//! - the round counter advances,
//! - both players gain `min(round, mana_gain_cap)` mana (the pool itself is
//!   not capped),
//! - both players draw one card,
//! - attacked / used-ability flags clear on every board minion and hero.
//!
//! The turn count within the round is kept explicitly in
//! `turns_this_round` rather than inferred from whose turn it is.

use tracing::debug;

use crate::cards::{CardDefinition, Hero, Minion};
use crate::core::{Player, PlayerId, PlayerMap, RulesConfig};
use crate::rules::engine::GameResult;
use crate::zones::{Board, Deck};

/// Everything needed to start one game.
#[derive(Clone, Debug)]
pub struct GameSetup {
    /// Unshuffled deck contents per player.
    pub decks: PlayerMap<Vec<CardDefinition>>,
    /// Hero definitions per player.
    pub heroes: PlayerMap<CardDefinition>,
    /// Seed for the deck shuffles. Each deck gets its own generator.
    pub seed: i64,
    /// Who takes the first turn.
    pub starting_player: PlayerId,
}

/// The state of one game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The four lanes.
    pub board: Board,

    /// Both seats.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub active: PlayerId,

    /// Round number, starting at 1.
    pub round: u32,

    starting_player: PlayerId,
    turns_this_round: u8,
    config: RulesConfig,
}

impl GameState {
    /// Deal a fresh game: shuffle both decks, seat the heroes at full
    /// health, give each player the starting mana and one card.
    #[must_use]
    pub fn new(config: &RulesConfig, setup: GameSetup) -> Self {
        let GameSetup {
            mut decks,
            heroes,
            seed,
            starting_player,
        } = setup;

        let mut players = PlayerMap::new(|id| {
            let cards = std::mem::take(&mut decks[id])
                .into_iter()
                .map(Minion::new)
                .collect();
            let hero = Hero::new(heroes[id].clone(), config.starting_health);
            Player::new(id, Deck::shuffled(cards, seed), hero, config.starting_mana)
        });
        for (_, player) in players.iter_mut() {
            player.draw_card();
        }

        debug!(seed, starting = %starting_player, "dealt new game");

        Self {
            board: Board::new(config.lane_capacity),
            players,
            active: starting_player,
            round: 1,
            starting_player,
            turns_this_round: 0,
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    /// Turns taken so far in the current round (0 or 1).
    #[must_use]
    pub fn turns_this_round(&self) -> u8 {
        self.turns_this_round
    }

    /// End the active player's turn.
    pub fn end_turn(&mut self) {
        let ending = self.active;
        for minion in self.board.minions_of_mut(ending) {
            minion.frozen = false;
        }

        self.active = ending.opponent();
        self.turns_this_round += 1;
        debug!(ended = %ending, active = %self.active, round = self.round, "turn over");

        if self.turns_this_round == 2 {
            self.turns_this_round = 0;
            self.begin_round();
        }
    }

    fn begin_round(&mut self) {
        self.round += 1;
        let gain = self.config.mana_gain(self.round);

        for (_, player) in self.players.iter_mut() {
            player.mana += gain;
            player.draw_card();
            player.hero.used_ability = false;
        }
        for minion in self.board.minions_mut() {
            minion.reset_round_flags();
        }

        debug!(round = self.round, gain, "round started");
    }

    /// The decided result, if a hero is down.
    ///
    /// Player one's hero is checked first, so a double knockout reads as a
    /// win for player two.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if self.players[PlayerId::ONE].hero.is_dead() {
            Some(GameResult::Winner(PlayerId::TWO))
        } else if self.players[PlayerId::TWO].hero.is_dead() {
            Some(GameResult::Winner(PlayerId::ONE))
        } else {
            None
        }
    }
}
