use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator for reproducible hand draws
#[derive(Clone)]
pub struct DrawRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new DrawRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        DrawRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.random_range(i + 1);
            array.swap(i, j);
        }
    }
}
