//! Where cards live: deck, hand, and the four-lane board.
//!
//! ## Key Types
//!
//! - `Deck`: Shuffled draw pile, drawn from the front
//! - `Hand`: Drawn cards, addressed by index
//! - `Board`: Four lanes of bounded capacity, two per player

pub mod board;
pub mod deck;
pub mod hand;

pub use board::{lane_for, lane_owner, lanes_of, Board, Lane, LANE_COUNT};
pub use deck::Deck;
pub use hand::Hand;
