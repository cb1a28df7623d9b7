//! The lane duel rules.
//!
//! ## Key Types
//!
//! - `GameState`: Board, players, round and turn for one game
//! - `RulesEngine`: Applies one action to a game state
//! - `DuelRules`: The duel's `RulesEngine`
//! - `TurnEngine`: Runs games in sequence and keeps the win tally
//! - `ActionOutput`: The result record of a query, rejection or kill

pub mod combat;
pub mod engine;
pub mod output;
pub mod powers;
pub mod state;

pub use engine::{DuelRules, GameResult, Handled, RulesEngine, Tally, TurnEngine};
pub use output::{ActionOutput, CardView, HeroView, Payload};
pub use state::{GameSetup, GameState};
