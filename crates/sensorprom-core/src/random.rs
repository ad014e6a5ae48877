//! Injectable randomness for the simulated workloads.
//!
//! Handlers and the sensor simulator never reach for a thread-local RNG; they
//! draw from a `RandomSource` handed to them at construction, so tests can
//! pin the sequence.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

pub trait RandomSource: Send + Sync {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }

    /// `true` with probability `p`.
    fn bernoulli(&self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Whole milliseconds drawn uniformly from `[0, max_ms)`.
    fn below_millis(&self, max_ms: u64) -> Duration {
        if max_ms == 0 {
            return Duration::ZERO;
        }
        let ms = (self.next_unit() * max_ms as f64) as u64;
        Duration::from_millis(ms.min(max_ms - 1))
    }
}

/// `StdRng` behind a mutex so one source can be shared across tasks.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.lock().gen::<f64>()
    }
}
