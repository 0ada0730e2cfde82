// Sources of uniform random numbers in [0, 1) used when spawning circles

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

// The browser's Math.random()
pub struct HostRandom;

impl RandomSource for HostRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

// StdRng wrapper, reproducible when built from a seed
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededRandom {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
