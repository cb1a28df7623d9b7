//! The turn engine.
//!
//! `RulesEngine` is the seam between the session and the rules: it applies
//! one action to a `GameState` and reports whether the game is decided.
//! `DuelRules` is the lane duel's implementation. `TurnEngine` owns the
//! game in progress and the cross-game tally, and answers the tally
//! queries itself.
//!
//! ## Results
//!
//! `apply` returns `Some(record)` for queries, rule violations and lethal
//! hero attacks, and `None` for commands that succeed silently or do not
//! apply (empty cells, unknown commands).

use tracing::{debug, info, warn};

use crate::core::{Action, Coordinates, PlayerId, PlayerMap, RulesConfig};
use crate::error::RuleViolation;
use crate::rules::combat;
use crate::rules::output::{ActionOutput, CardView, HeroView, Payload, NO_CARD_AT_POSITION};
use crate::rules::powers;
use crate::rules::state::{GameSetup, GameState};
use crate::zones::lane_for;

/// Result of a decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The player whose opponent's hero went down.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// What a handler produces: a record, nothing, or a rejection.
pub type Handled = Result<Option<ActionOutput>, RuleViolation>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: Must be deterministic; the same state and action
///   always produce the same result
/// - `apply_action`: A rejection must leave `state` untouched
/// - `is_terminal`: Return None while no hero is down
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Apply one action to the game state.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Handled;

    /// Check if the game is decided.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// The lane duel rules.
#[derive(Clone, Debug, Default)]
pub struct DuelRules {
    config: RulesConfig,
}

impl DuelRules {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// `placeCard`: move a hand card onto its lane.
    fn place_card(state: &mut GameState, hand_idx: i32) -> Result<(), RuleViolation> {
        let current = state.active;
        let index = usize::try_from(hand_idx).map_err(|_| RuleViolation::CardNotInHand)?;
        let player = &mut state.players[current];
        let card = player.hand.get(index).ok_or(RuleViolation::CardNotInHand)?;
        if !player.can_afford(card.mana()) {
            return Err(RuleViolation::NotEnoughManaForCard);
        }
        let role = card.kind().lane_role().ok_or(RuleViolation::NoLaneForCard)?;
        let row = lane_for(role, current);

        let card = player.hand.remove(index).ok_or(RuleViolation::CardNotInHand)?;
        let cost = card.mana();
        match state.board.place(row, card) {
            Ok(slot) => {
                player.mana -= cost;
                debug!(player = %current, row, slot, cost, "card placed");
                Ok(())
            }
            Err(card) => {
                player.hand.insert(index, card);
                Err(RuleViolation::LaneFull)
            }
        }
    }

    /// Queries that only read the game state.
    fn query(state: &GameState, action: &Action) -> Option<ActionOutput> {
        let record = ActionOutput::query(action);
        let record = match *action {
            Action::GetPlayerDeck { player_idx } => {
                let deck = &state.players[PlayerId::from_query(player_idx)].deck;
                record
                    .with_player(player_idx)
                    .with_output(Payload::cards(deck.iter()))
            }
            Action::GetCardsInHand { player_idx } => {
                let hand = &state.players[PlayerId::from_query(player_idx)].hand;
                record
                    .with_player(player_idx)
                    .with_output(Payload::cards(hand.iter()))
            }
            Action::GetPlayerHero { player_idx } => {
                let hero = &state.players[PlayerId::from_query(player_idx)].hero;
                record
                    .with_player(player_idx)
                    .with_output(Payload::Hero(HeroView::from(hero)))
            }
            Action::GetPlayerMana { player_idx } => {
                let mana = state.players[PlayerId::from_query(player_idx)].mana;
                record
                    .with_player(player_idx)
                    .with_output(Payload::Number(i64::from(mana)))
            }
            Action::GetPlayerTurn => {
                record.with_output(Payload::Number(i64::from(state.active.index())))
            }
            Action::GetCardsOnTable => {
                let table = state
                    .board
                    .lanes()
                    .map(|lane| lane.iter().map(CardView::from).collect())
                    .collect();
                record.with_output(Payload::Table(table))
            }
            Action::GetCardAtPosition { x, y } => {
                let at = Coordinates::new(x, y);
                let output = match state.board.get(at) {
                    Some(minion) => Payload::Card(CardView::from(minion)),
                    None => Payload::Message(NO_CARD_AT_POSITION),
                };
                record.with_position(at).with_output(output)
            }
            Action::GetFrozenCardsOnTable => {
                record.with_output(Payload::cards(state.board.frozen()))
            }
            _ => return None,
        };
        Some(record)
    }
}

impl RulesEngine for DuelRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Handled {
        match *action {
            Action::PlaceCard { hand_idx } => Self::place_card(state, hand_idx).map(|()| None),
            Action::EndPlayerTurn => {
                state.end_turn();
                Ok(None)
            }
            Action::CardUsesAttack {
                card_attacker,
                card_attacked,
            } => combat::card_attack(state, card_attacker, card_attacked).map(|()| None),
            Action::CardUsesAbility {
                card_attacker,
                card_attacked,
            } => combat::card_ability(state, card_attacker, card_attacked).map(|()| None),
            Action::UseAttackHero { card_attacker } => {
                let decided = combat::attack_hero(state, card_attacker)?;
                Ok(decided.map(|GameResult::Winner(winner)| ActionOutput::game_ended(winner)))
            }
            Action::UseHeroAbility { affected_row } => {
                powers::use_hero_power(state, affected_row).map(|()| None)
            }
            _ => Ok(Self::query(state, action)),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.outcome()
    }
}

/// Games played and won across one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games started, including the one in progress.
    pub games_played: u32,
    /// Wins per player.
    pub wins: PlayerMap<u32>,
}

/// Drives games one after another and keeps the session tally.
///
/// ## Example
///
/// ```
/// use lane_duel::cards::CardDefinition;
/// use lane_duel::core::{Action, PlayerId, PlayerMap, RulesConfig};
/// use lane_duel::rules::{GameSetup, TurnEngine};
///
/// let mut engine = TurnEngine::new(RulesConfig::default());
/// engine.start_game(GameSetup {
///     decks: PlayerMap::new(|_| vec![CardDefinition::minion("Sentinel", 0, 1, 1)]),
///     heroes: PlayerMap::with_value(CardDefinition::hero("Lord Royce", 1)),
///     seed: 0,
///     starting_player: PlayerId::ONE,
/// });
///
/// assert!(engine.apply(&Action::PlaceCard { hand_idx: 0 }).is_none());
/// let turn = engine.apply(&Action::GetPlayerTurn).unwrap();
/// assert_eq!(serde_json::to_string(&turn).unwrap(), r#"{"command":"getPlayerTurn","output":1}"#);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<R = DuelRules> {
    rules: R,
    tally: Tally,
    game: Option<GameState>,
}

impl TurnEngine<DuelRules> {
    /// Create an engine for the lane duel rules.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self::with_rules(DuelRules::new(config))
    }
}

impl<R: RulesEngine> TurnEngine<R> {
    /// Create an engine over any rules implementation.
    #[must_use]
    pub fn with_rules(rules: R) -> Self {
        Self {
            rules,
            tally: Tally::default(),
            game: None,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The game in progress, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    /// Replace the current game with a freshly dealt one. The tally
    /// carries over.
    pub fn start_game(&mut self, setup: GameSetup) {
        self.tally.games_played += 1;
        info!(
            game = self.tally.games_played,
            seed = setup.seed,
            starting = %setup.starting_player,
            "game started"
        );
        self.game = Some(GameState::new(self.rules.config(), setup));
    }

    /// Close the game in progress, returning its final state.
    pub fn finish_game(&mut self) -> Option<GameState> {
        let finished = self.game.take();
        if let Some(state) = &finished {
            info!(
                rounds = state.round,
                result = ?self.rules.is_terminal(state),
                wins_one = self.tally.wins[PlayerId::ONE],
                wins_two = self.tally.wins[PlayerId::TWO],
                "game finished"
            );
        }
        finished
    }

    /// Apply one action, returning its result record if it has one.
    ///
    /// Decided games keep accepting actions; every lethal hero attack is
    /// reported and counted.
    pub fn apply(&mut self, action: &Action) -> Option<ActionOutput> {
        match *action {
            Action::GetPlayerOneWins => {
                let wins = self.tally.wins[PlayerId::ONE];
                return Some(ActionOutput::query(action).with_output(Payload::Number(i64::from(wins))));
            }
            Action::GetPlayerTwoWins => {
                let wins = self.tally.wins[PlayerId::TWO];
                return Some(ActionOutput::query(action).with_output(Payload::Number(i64::from(wins))));
            }
            Action::GetTotalGamesPlayed => {
                let games = self.tally.games_played;
                return Some(ActionOutput::query(action).with_output(Payload::Number(i64::from(games))));
            }
            Action::Unknown => {
                debug!("ignoring unknown command");
                return None;
            }
            _ => {}
        }

        let Some(state) = self.game.as_mut() else {
            warn!(command = action.command(), "no game in progress");
            return None;
        };

        match self.rules.apply_action(state, action) {
            Ok(Some(record)) => {
                if record.game_ended.is_some() {
                    if let Some(GameResult::Winner(winner)) = self.rules.is_terminal(state) {
                        self.tally.wins[winner] += 1;
                        info!(winner = %winner, "hero killed");
                    }
                }
                Some(record)
            }
            Ok(None) => {
                debug!(command = action.command(), "applied");
                None
            }
            Err(violation) => {
                debug!(command = action.command(), %violation, "rejected");
                Some(ActionOutput::rejected(action, violation))
            }
        }
    }
}
