use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::tile::Tile;

/// Source of permutations for dealing. Injected so tests can pin the deal.
pub trait Shuffler {
    fn shuffle_tiles(&mut self, tiles: &mut [Tile]);
}

/// Seeded random number generator for reproducible deals
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng with an optional seed.
    /// If seed is None, a random seed is drawn from the thread rng.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        GameRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random_range(i + 1);
            items.swap(i, j);
        }
    }
}

impl Shuffler for GameRng {
    fn shuffle_tiles(&mut self, tiles: &mut [Tile]) {
        self.shuffle(tiles);
    }
}

/// Leaves the tiles in the order given. Deals become fully predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle_tiles(&mut self, _tiles: &mut [Tile]) {}
}
