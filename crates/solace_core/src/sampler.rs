//! Pluggable randomness for content sampling.
//!
//! Detection and arbitration never consult the sampler; only the choice of
//! which candidate text to show does. Seeding it makes whole turns replayable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub trait Sampler: Send + Sync {
    /// Uniform index in `0..len`, or `None` when `len == 0`.
    fn index(&self, len: usize) -> Option<usize>;

    /// Up to `amount` distinct indices in `0..len`, without replacement.
    fn distinct(&self, len: usize, amount: usize) -> Vec<usize>;
}

/// Pick one element uniformly. Empty slices yield `None`.
pub fn choose<'a, T>(sampler: &dyn Sampler, items: &'a [T]) -> Option<&'a T> {
    sampler.index(items.len()).and_then(|i| items.get(i))
}

/// `StdRng`-backed sampler, seeded from entropy in production and from a
/// fixed seed in tests.
pub struct RngSampler {
    rng: Mutex<StdRng>,
}

impl RngSampler {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RngSampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Sampler for RngSampler {
    fn index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Some(rng.gen_range(0..len))
    }

    fn distinct(&self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        if amount == 0 {
            return Vec::new();
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rand::seq::index::sample(&mut *rng, len, amount).into_vec()
    }
}
