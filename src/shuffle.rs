
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// shuffles slices with the fisher-yates algorithm, optionally seeded for
/// reproducible orderings.
///
/// one instance owns one generator and is meant to be reused; every shuffle
/// advances the generator state. not safe for concurrent use - give each
/// thread its own instance, or put this behind a lock
pub struct Shuffler {
    rng: ChaCha8Rng,
}

impl Shuffler {
    /// generator seeded from os entropy. orderings differ from run to run
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// deterministic: the same seed gives the same sequence of orderings on
    /// every run and every platform
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// throw away the generator state and start over from seed. whatever was
    /// shuffled before the reseed has no influence on what comes after
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// reorder items in place, every ordering equally likely. a slice of
    /// length 0 or 1 is left alone without consuming any randomness
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }

    /// like shuffle_in_place, but on a clone. the original keeps its order
    pub fn shuffle_copy<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copied = items.to_vec();
        self.shuffle_in_place(&mut copied);
        copied
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Shuffler::new()
    }
}
