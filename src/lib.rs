//! # lane-duel
//!
//! A deterministic engine for a two-player, turn-based card duel. Each
//! player has a hero, a shuffled deck and a hand, and fights over four
//! board lanes. A driver feeds the engine symbolic actions one at a time;
//! the engine applies the rules in order and reports a result record for
//! every query, every rejected command and every killed hero.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The same startup record and action list always
//!    produce the same results. Deck order follows the shuffle seed exactly.
//!
//! 2. **Names Resolve Once**: Card and hero names are turned into closed
//!    enums when a card is built. Rule code never compares strings.
//!
//! 3. **Rejections Are Data**: Rule violations become result records and
//!    processing continues. Only loading problems are errors.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, rules configuration, actions
//! - `cards`: Card definitions, the catalog, minions and heroes
//! - `zones`: Deck, hand and the four-lane board
//! - `rules`: Game state, combat, hero powers, the turn engine
//! - `session`: Input file format and the multi-game driver
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Action, Coordinates, GameRng, Player, PlayerId, PlayerMap, RulesConfig};

pub use crate::cards::{CardDefinition, Hero, HeroPower, Minion, MinionAbility, MinionKind};

pub use crate::zones::{Board, Deck, Hand};

pub use crate::rules::{
    ActionOutput, DuelRules, GameResult, GameSetup, GameState, RulesEngine, Tally, TurnEngine,
};

pub use crate::session::{InputFile, Session};

pub use crate::error::{DuelError, Result, RuleViolation};
