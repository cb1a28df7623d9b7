//! Draw piles.

use std::collections::VecDeque;

use crate::cards::Minion;
use crate::core::GameRng;

/// A player's remaining cards. Draws come off the front.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: VecDeque<Minion>,
}

impl Deck {
    /// Build a deck in the given order.
    #[must_use]
    pub fn new(cards: Vec<Minion>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Build a deck and shuffle it with a fresh generator for `seed`.
    #[must_use]
    pub fn shuffled(mut cards: Vec<Minion>, seed: i64) -> Self {
        GameRng::new(seed).shuffle(&mut cards);
        Self::new(cards)
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Option<Minion> {
        self.cards.pop_front()
    }

    /// Remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Minion> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
