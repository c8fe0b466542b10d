use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};

use crate::{error::InvalidInput, table::AliasTable};

/// An [`AliasTable`] bundled with the random source it draws from.
///
/// The RNG is injected, so tests can seed it and get reproducible draws.
#[derive(Debug, Clone)]
pub struct AliasSampler<R = ThreadRng> {
    table: AliasTable,
    rng: R,
}

impl AliasSampler<ThreadRng> {
    /// Build a sampler backed by the thread-local RNG.
    pub fn new(weights: &[f64]) -> Result<Self, InvalidInput> {
        Self::with_rng(weights, rand::rng())
    }
}

impl AliasSampler<StdRng> {
    /// Build a sampler whose draws are reproducible from `seed`.
    pub fn seeded(weights: &[f64], seed: u64) -> Result<Self, InvalidInput> {
        Self::with_rng(weights, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AliasSampler<R> {
    pub fn with_rng(weights: &[f64], rng: R) -> Result<Self, InvalidInput> {
        Ok(Self::from_table(AliasTable::new(weights)?, rng))
    }

    pub const fn from_table(table: AliasTable, rng: R) -> Self {
        Self { table, rng }
    }

    /// Draw the next outcome index, always in `0..self.size()`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> usize {
        self.table.sample_index(&mut self.rng)
    }

    /// Effective outcome count. One more than the number of weights when
    /// they summed to less than one.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Draw `draws` times and count hits per outcome.
    pub fn sample_counts(&mut self, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.size()];
        for _ in 0..draws {
            counts[self.next()] += 1;
        }
        counts
    }

    /// Empirical frequency of each outcome over `draws` draws.
    pub fn frequencies(&mut self, draws: usize) -> Vec<f64> {
        if draws == 0 {
            return vec![0.0; self.size()];
        }
        self.sample_counts(draws)
            .into_iter()
            .map(|c| c as f64 / draws as f64)
            .collect()
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    pub fn into_table(self) -> AliasTable {
        self.table
    }
}
