use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator for reproducible simulations.
///
/// The engine never promises reproducibility on its own; determinism is
/// only guaranteed when a caller constructs the source with [`SimRng::seeded`].
#[derive(Clone)]
pub struct SimRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SimRng {
    /// Create a generator from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        SimRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator from OS entropy. The chosen seed is recorded so a
    /// run can still be replayed after the fact.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::seeded(seed)
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    /// Fisher-Yates shuffle of a mutable slice.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}
