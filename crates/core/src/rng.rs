use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniform indices. The only randomness the engine consumes.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is always at least 1.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for RngState {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
