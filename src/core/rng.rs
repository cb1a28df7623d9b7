//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Fixture-compatible**: The 48-bit linear congruential generator and
//!   the backwards Fisher-Yates pass reproduce the deck orders that existing
//!   game fixtures were recorded with
//! - **`rand` interop**: Implements `RngCore` and `SeedableRng`
//!
//! ## Usage
//!
//! ```
//! use lane_duel::core::GameRng;
//!
//! let mut deck = vec![1, 2, 3, 4, 5];
//! GameRng::new(42).shuffle(&mut deck);
//!
//! // Same seed, same order
//! let mut again = vec![1, 2, 3, 4, 5];
//! GameRng::new(42).shuffle(&mut again);
//! assert_eq!(deck, again);
//! ```

use rand::{RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5DEE_CE66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Deterministic 48-bit LCG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    state: u64,
    seed: i64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Advance the generator and return the top `bits` bits of the state.
    fn next_bits(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Next value over the full `i32` range.
    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Uniform integer in `0..bound`.
    ///
    /// Panics if `bound` is not positive.
    pub fn next_below(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");

        if bound & bound.wrapping_neg() == bound {
            return ((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            // Reject the tail of the range that would bias the result.
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    /// Shuffle a slice in place.
    ///
    /// Walks from the back, swapping each slot with a uniformly chosen
    /// earlier (or same) slot.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (2..=slice.len()).rev() {
            let j = self.next_below(i as i32) as usize;
            slice.swap(i - 1, j);
        }
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = i64::from(self.next_bits(32)) << 32;
        high.wrapping_add(i64::from(self.next_bits(32))) as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GameRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_known_first_value() {
        // Reference value for a zero seed.
        let mut rng = GameRng::new(0);
        assert_eq!(rng.next_i32(), -1_155_484_576);
    }

    #[test]
    fn test_bounded_sequence() {
        let mut rng = GameRng::new(42);
        let seq: Vec<_> = (0..5).map(|_| rng.next_below(10)).collect();
        assert_eq!(seq, vec![0, 3, 8, 4, 0]);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_below(1000), rng2.next_below(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_matches_fixture_order() {
        let mut data = vec![1, 2, 3, 4, 5];
        GameRng::new(42).shuffle(&mut data);
        assert_eq!(data, vec![2, 3, 4, 5, 1]);

        let mut data: Vec<i32> = (1..=10).collect();
        GameRng::new(12345).shuffle(&mut data);
        assert_eq!(data, vec![4, 3, 1, 6, 9, 10, 7, 8, 5, 2]);
    }

    #[test]
    fn test_shuffle_negative_seed() {
        let mut data = vec!['a', 'b', 'c', 'd'];
        GameRng::new(-7).shuffle(&mut data);
        assert_eq!(data, vec!['c', 'd', 'a', 'b']);
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut rng = GameRng::new(9);
        let mut empty: Vec<i32> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_rand_interop() {
        let mut rng = GameRng::seed_from_u64(42);
        let mut reference = GameRng::new(42);

        let value: u32 = rng.gen();
        assert_eq!(value, reference.next_i32() as u32);

        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes);
        assert!(rng.gen_range(0..10) < 10);
    }
}
