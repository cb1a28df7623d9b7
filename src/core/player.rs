//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The duel always has exactly two seats, numbered 1 and 2 the way the
//! action records number them.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::DuelError;

use crate::cards::Hero;
use crate::zones::{Deck, Hand};

/// One of the two seats at the table.
///
/// Stored 1-based, matching `playerIdx` in action records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player one (owns lanes 2 and 3).
    pub const ONE: PlayerId = PlayerId(1);
    /// Player two (owns lanes 0 and 1).
    pub const TWO: PlayerId = PlayerId(2);

    /// Both players, in seat order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::ONE, PlayerId::TWO];

    /// Parse a 1-based seat number.
    ///
    /// ```
    /// use lane_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_index(1), Some(PlayerId::ONE));
    /// assert_eq!(PlayerId::from_index(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Resolve the `playerIdx` of a query: 1 is player one, anything else
    /// is player two.
    #[must_use]
    pub const fn from_query(index: i32) -> Self {
        if index == 1 {
            Self::ONE
        } else {
            Self::TWO
        }
    }

    /// The 1-based seat number.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == 1 {
            Self::TWO
        } else {
            Self::ONE
        }
    }

    const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = DuelError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(i64::from(index)).ok_or(DuelError::PlayerIndex(index))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "Player one"),
            _ => write!(f, "Player two"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use lane_duel::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[PlayerId::TWO] += 1;
///
/// assert_eq!(wins[PlayerId::ONE], 0);
/// assert_eq!(wins[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map from player one's and player two's values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.slot()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.slot()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat's resources for the game in progress.
///
/// Whose turn it is lives on the game state, so exactly one player is
/// active by construction.
#[derive(Clone, Debug)]
pub struct Player {
    /// Seat number.
    pub id: PlayerId,

    /// Spendable mana. Grows every round with no overall ceiling.
    pub mana: i32,

    /// Cards drawn and not yet placed.
    pub hand: Hand,

    /// Cards not yet drawn.
    pub deck: Deck,

    /// The player's hero.
    pub hero: Hero,
}

impl Player {
    /// Seat a player with a shuffled deck and an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, deck: Deck, hero: Hero, mana: i32) -> Self {
        Self {
            id,
            mana,
            hand: Hand::new(),
            deck,
            hero,
        }
    }

    /// Move the front card of the deck into the hand.
    ///
    /// Drawing from an empty deck does nothing.
    pub fn draw_card(&mut self) -> bool {
        match self.deck.draw() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Whether `cost` can be paid from the current pool.
    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        cost <= self.mana
    }
}
