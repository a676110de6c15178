use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Where a [`SeededNoise`] gets its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    /// Reproducible runs.
    Fixed(u64),
    /// Derived from the wall clock; every run differs.
    Clock,
}

impl Seed {
    /// Command-line sentinel meaning "derive from the current time".
    pub const CLOCK_SENTINEL: i64 = -1;

    /// Interpret a signed seed flag; [`Seed::CLOCK_SENTINEL`] selects [`Seed::Clock`].
    pub fn from_flag(value: i64) -> Self {
        if value == Self::CLOCK_SENTINEL {
            Self::Clock
        } else {
            Self::Fixed(value as u64)
        }
    }

    /// Concrete 64-bit seed, sampling the clock for [`Seed::Clock`].
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(v) => v,
            Self::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0),
        }
    }
}

/// The single ordered stream of random draws shared by every stage.
///
/// The order and kind of draws is observable: the same seed must give the same image.
pub trait NoiseSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn uniform_int(&mut self, n: u64) -> u64;

    /// Uniform real in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;

    /// Standard normal deviate.
    fn normal(&mut self) -> f64;

    /// One normal deviate scaled by `stddev`, truncated toward zero.
    fn offset(&mut self, stddev: f64) -> i64 {
        (self.normal() * stddev) as i64
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn uniform_int(&mut self, n: u64) -> u64 {
        (**self).uniform_int(n)
    }

    fn uniform_float(&mut self) -> f64 {
        (**self).uniform_float()
    }

    fn normal(&mut self) -> f64 {
        (**self).normal()
    }
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct SeededNoise {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededNoise {
    /// Generator for `seed`; [`Seed::Clock`] samples the time once, here.
    pub fn new(seed: Seed) -> Self {
        let seed = seed.resolve();
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed actually in use (useful to reproduce a clock-seeded run).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NoiseSource for SeededNoise {
    fn uniform_int(&mut self, n: u64) -> u64 {
        self.rng.random_range(0..n)
    }

    fn uniform_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

#[cfg(test)]
#[path = "../tests/unit/noise.rs"]
mod tests;
