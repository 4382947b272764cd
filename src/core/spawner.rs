//=========================================================================
// Snake Spawner
//=========================================================================
//
// Uniform random spawn positions along the lateral spawn line.
//
// Backed by `SmallRng` so the session can run fully deterministic when
// seeded, which the test suite and any replay tooling rely on. The
// entropy-seeded constructor is what the shipped runtime uses.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

//=== SnakeSpawner ========================================================

/// Draws spawn X positions uniformly from a closed integer range.
pub struct SnakeSpawner {
    rng: SmallRng,
    lowest: i32,
    highest: i32,
}

impl SnakeSpawner {
    /// Creates a spawner seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if `lowest > highest`.
    pub fn new(lowest: i32, highest: i32) -> Self {
        Self::with_rng(lowest, highest, SmallRng::from_entropy())
    }

    /// Creates a deterministic spawner from an explicit seed.
    pub fn seeded(lowest: i32, highest: i32, seed: u64) -> Self {
        Self::with_rng(lowest, highest, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(lowest: i32, highest: i32, rng: SmallRng) -> Self {
        assert!(
            lowest <= highest,
            "Spawn range is inverted: [{}, {}]",
            lowest,
            highest
        );
        Self {
            rng,
            lowest,
            highest,
        }
    }

    /// Next spawn X, uniform over `[lowest, highest]`.
    pub fn next_x(&mut self) -> f32 {
        self.rng.gen_range(self.lowest..=self.highest) as f32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
