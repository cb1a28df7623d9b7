//! Core engine types: players, RNG, configuration, actions.
//!
//! These are the building blocks every other module speaks in. Nothing
//! here knows the rules of the duel.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, Coordinates};
pub use config::RulesConfig;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
