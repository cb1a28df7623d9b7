//! Card system: definitions, the name catalog, and runtime card state.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data as it arrives from the input
//! - `MinionKind` / `HeroPower`: Names resolved into closed rule enums
//! - `Minion`: A deck card with its combat state
//! - `Hero`: A player's hero with its power

pub mod catalog;
pub mod definition;
pub mod hero;
pub mod minion;

pub use catalog::{HeroPower, LaneRole, MinionAbility, MinionKind, TargetSide};
pub use definition::{CardDefinition, Colors};
pub use hero::Hero;
pub use minion::Minion;
