//! Random number generation for dungeon layouts
//!
//! Uses a seeded ChaCha RNG so a seed and a config always reproduce the
//! same dungeon.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coord::{Bounds, Coord};
use crate::consts::PERCENT;

/// Injectable random source for the generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform integer in `min..=max`
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Roll in `[0, 100)` and succeed when below `percent`
    ///
    /// Anything at or below 0 never succeeds, anything at or above 100
    /// always does.
    pub fn chance(&mut self, percent: f64) -> bool {
        self.rng.gen_range(0.0..PERCENT) < percent
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Generate a random cell within bounds
    pub fn random_coord(&mut self, bounds: Bounds) -> Coord {
        Coord::new(
            self.rn2(bounds.width as u32) as i32,
            self.rn2(bounds.height as u32) as i32,
        )
    }
}
