//! The board: four fixed, capacity-bounded lanes.
//!
//! Lane ownership is fixed by position:
//!
//! | Lane | Owner      | Role           |
//! |------|------------|----------------|
//! | 0    | player two | back (ranged)  |
//! | 1    | player two | front (melee)  |
//! | 2    | player one | front (melee)  |
//! | 3    | player one | back (ranged)  |
//!
//! Each player's ranged lane is on their own edge of the board and the two
//! melee lanes meet in the middle. Sentinel, Berserker, The Cursed One and
//! Disciple go to the ranged lane; the other catalog minions go to the melee
//! lane.
//!
//! The board is a bounds-checked store. Out-of-range coordinates read as
//! empty; rule logic lives in `rules`.

use smallvec::SmallVec;

use crate::cards::{LaneRole, Minion};
use crate::core::{Coordinates, PlayerId};

/// Number of lanes on the board.
pub const LANE_COUNT: usize = 4;

/// One lane, in placement order.
pub type Lane = SmallVec<[Minion; 5]>;

/// The player owning lane `row`, `None` when `row` is off the board.
///
/// ```
/// use lane_duel::core::PlayerId;
/// use lane_duel::zones::lane_owner;
///
/// assert_eq!(lane_owner(0), Some(PlayerId::TWO));
/// assert_eq!(lane_owner(3), Some(PlayerId::ONE));
/// assert_eq!(lane_owner(4), None);
/// ```
#[must_use]
pub fn lane_owner(row: i32) -> Option<PlayerId> {
    match row {
        0 | 1 => Some(PlayerId::TWO),
        2 | 3 => Some(PlayerId::ONE),
        _ => None,
    }
}

/// The two lanes a player owns.
#[must_use]
pub fn lanes_of(player: PlayerId) -> [usize; 2] {
    if player == PlayerId::ONE {
        [2, 3]
    } else {
        [0, 1]
    }
}

/// The lane a player places a card of the given role in.
#[must_use]
pub fn lane_for(role: LaneRole, player: PlayerId) -> usize {
    match (player == PlayerId::ONE, role) {
        (true, LaneRole::Front) => 2,
        (true, LaneRole::Back) => 3,
        (false, LaneRole::Front) => 1,
        (false, LaneRole::Back) => 0,
    }
}

/// The four lanes.
#[derive(Clone, Debug)]
pub struct Board {
    lanes: [Lane; LANE_COUNT],
    capacity: usize,
}

impl Board {
    /// Create an empty board whose lanes hold up to `capacity` minions.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lanes: Default::default(),
            capacity,
        }
    }

    /// Maximum minions per lane.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn cell(at: Coordinates) -> Option<(usize, usize)> {
        let row = usize::try_from(at.x).ok()?;
        let slot = usize::try_from(at.y).ok()?;
        (row < LANE_COUNT).then_some((row, slot))
    }

    /// Append a minion to lane `row`.
    ///
    /// Returns the slot it landed in, or hands the minion back when the
    /// lane is full.
    pub fn place(&mut self, row: usize, mut minion: Minion) -> Result<usize, Minion> {
        let capacity = self.capacity;
        match self.lanes.get_mut(row) {
            Some(lane) if lane.len() < capacity => {
                minion.set_row(row);
                lane.push(minion);
                Ok(lane.len() - 1)
            }
            _ => Err(minion),
        }
    }

    /// Whether lane `row` has no room left.
    #[must_use]
    pub fn is_full(&self, row: usize) -> bool {
        self.lanes.get(row).map_or(true, |lane| lane.len() >= self.capacity)
    }

    /// The minion at `at`, if any.
    #[must_use]
    pub fn get(&self, at: Coordinates) -> Option<&Minion> {
        let (row, slot) = Self::cell(at)?;
        self.lanes[row].get(slot)
    }

    /// Mutable access to the minion at `at`.
    pub fn get_mut(&mut self, at: Coordinates) -> Option<&mut Minion> {
        let (row, slot) = Self::cell(at)?;
        self.lanes[row].get_mut(slot)
    }

    /// Remove and return the minion at `at`. Later minions in the lane
    /// shift one slot towards the front.
    pub fn remove(&mut self, at: Coordinates) -> Option<Minion> {
        let (row, slot) = Self::cell(at)?;
        let lane = &mut self.lanes[row];
        (slot < lane.len()).then(|| lane.remove(slot))
    }

    /// The minions of lane `row`, `None` when `row` is off the board.
    #[must_use]
    pub fn lane(&self, row: i32) -> Option<&[Minion]> {
        let row = usize::try_from(row).ok()?;
        self.lanes.get(row).map(|lane| lane.as_slice())
    }

    /// Mutable access to lane `row`.
    pub fn lane_mut(&mut self, row: i32) -> Option<&mut Lane> {
        let row = usize::try_from(row).ok()?;
        self.lanes.get_mut(row)
    }

    /// All lanes, in index order.
    pub fn lanes(&self) -> impl Iterator<Item = &[Minion]> {
        self.lanes.iter().map(|lane| lane.as_slice())
    }

    /// Every minion on the board, lane by lane.
    pub fn minions(&self) -> impl Iterator<Item = &Minion> {
        self.lanes.iter().flatten()
    }

    /// Every minion on the board, mutably.
    pub fn minions_mut(&mut self) -> impl Iterator<Item = &mut Minion> {
        self.lanes.iter_mut().flatten()
    }

    /// The minions in a player's lanes.
    pub fn minions_of(&self, player: PlayerId) -> impl Iterator<Item = &Minion> {
        lanes_of(player).into_iter().flat_map(move |row| self.lanes[row].iter())
    }

    /// The minions in a player's lanes, mutably.
    pub fn minions_of_mut(&mut self, player: PlayerId) -> impl Iterator<Item = &mut Minion> {
        let [low, high] = lanes_of(player);
        let (front, back) = self.lanes.split_at_mut(high);
        front[low].iter_mut().chain(back[0].iter_mut())
    }

    /// Frozen minions, lane by lane.
    pub fn frozen(&self) -> impl Iterator<Item = &Minion> {
        self.minions().filter(|minion| minion.frozen)
    }

    /// Whether any lane owned by `player` holds a tank.
    #[must_use]
    pub fn has_tank(&self, player: PlayerId) -> bool {
        self.minions_of(player).any(Minion::is_tank)
    }

    /// Total minions on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.iter().map(|lane| lane.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty every lane.
    pub fn clear(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
    }
}
