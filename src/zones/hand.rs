//! The cards a player holds.

use crate::cards::Minion;

/// Cards drawn and not yet placed, in draw order.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Minion>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card at the end.
    pub fn push(&mut self, card: Minion) {
        self.cards.push(card);
    }

    /// The card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Minion> {
        self.cards.get(index)
    }

    /// Take the card at `index` out of the hand.
    pub fn remove(&mut self, index: usize) -> Option<Minion> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Put a card back at `index`, clamped to the hand's length.
    pub fn insert(&mut self, index: usize, card: Minion) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }

    /// Cards affordable with `mana`.
    pub fn playable(&self, mana: i32) -> impl Iterator<Item = &Minion> {
        self.cards.iter().filter(move |card| card.mana() <= mana)
    }

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
