//! Vose's alias method for O(1) sampling from a discrete distribution.

use std::collections::VecDeque;

use log::{debug, trace};
use rand::Rng;
use rand::distr::Distribution;

use crate::error::InvalidInput;
use crate::normalize::{Normalized, scale_for_alias_method};

/// Probability and alias tables for a fixed discrete distribution.
///
/// Column `i` returns `i` itself with chance `probability[i]` and
/// `alias[i]` otherwise. The tables are built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    probability: Vec<f64>,
    alias: Vec<usize>,
    augmented: bool,
}

impl AliasTable {
    /// Build the tables from non-negative weights. O(n).
    ///
    /// Weights are scaled by [`scale_for_alias_method`] first, so a list
    /// summing to less than one yields `weights.len() + 1` outcomes.
    ///
    /// # Errors
    /// * [`InvalidInput::EmptyWeights`] if `weights` is empty.
    /// * [`InvalidInput::NonNumericWeight`] if any weight is NaN or infinite.
    /// * [`InvalidInput::NegativeWeight`] if any weight is negative.
    pub fn new(weights: &[f64]) -> Result<Self, InvalidInput> {
        let normalized = scale_for_alias_method(weights)?;
        debug!(
            "building alias table: {} weights, {} outcomes, augmented={}",
            weights.len(),
            normalized.len(),
            normalized.augmented
        );
        Ok(Self::fill(normalized))
    }

    /// Like [`new`](Self::new), but an absent list is
    /// [`InvalidInput::MissingWeights`].
    pub fn from_optional(weights: Option<&[f64]>) -> Result<Self, InvalidInput> {
        Self::new(weights.ok_or(InvalidInput::MissingWeights)?)
    }

    fn fill(normalized: Normalized) -> Self {
        let Normalized {
            probabilities: mut p,
            augmented,
        } = normalized;
        let n = p.len();
        let average = 1.0 / n as f64;

        let mut probability = vec![0.0f64; n];
        // Columns left over at the end keep themselves as alias.
        let mut alias = (0..n).collect::<Vec<_>>();

        let mut small = VecDeque::with_capacity(n);
        let mut large = VecDeque::with_capacity(n);

        for (i, &pi) in p.iter().enumerate() {
            if pi >= average {
                large.push_back(i);
            } else {
                small.push_back(i);
            }
        }

        while let (Some(less), Some(more)) = (small.front().copied(), large.front().copied()) {
            small.pop_front();
            large.pop_front();

            // 1/n maps to a coin weight of 1.0
            probability[less] = p[less] * n as f64;
            alias[less] = more;

            p[more] = (p[more] + p[less]) - average;
            trace!(
                "column {less} -> alias {more}, coin {:.6}, remaining {:.6}",
                probability[less],
                p[more]
            );

            if p[more] >= average {
                large.push_back(more);
            } else {
                small.push_back(more);
            }
        }

        // Whatever is left holds ~1/n up to rounding.
        for i in small.into_iter().chain(large) {
            probability[i] = 1.0;
        }

        Self {
            probability,
            alias,
            augmented,
        }
    }

    /// Draw a single outcome index in O(1).
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let column = rng.random_range(0..self.probability.len());
        let coin: f64 = rng.random();
        if coin < self.probability[column] {
            column
        } else {
            self.alias[column]
        }
    }

    /// Effective outcome count, including a synthetic trailing outcome.
    pub fn len(&self) -> usize {
        self.probability.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probability.is_empty()
    }

    /// Whether a trailing "none of the above" outcome was appended
    /// because the weights summed to less than one.
    pub fn augmented(&self) -> bool {
        self.augmented
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probability
    }

    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }

    /// The probability of drawing `index`, read back from the tables.
    ///
    /// Returns 0.0 for an out-of-range index.
    pub fn outcome_probability(&self, index: usize) -> f64 {
        if index >= self.len() {
            return 0.0;
        }
        let mass: f64 = self
            .probability
            .iter()
            .zip(&self.alias)
            .enumerate()
            .map(|(column, (&prob, &alias))| {
                let own = if column == index { prob } else { 0.0 };
                let aliased = if alias == index && column != index {
                    1.0 - prob
                } else {
                    0.0
                };
                own + aliased
            })
            .sum();
        mass / self.len() as f64
    }
}

impl Distribution<usize> for AliasTable {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sample_index(rng)
    }
}

impl TryFrom<&[f64]> for AliasTable {
    type Error = InvalidInput;

    fn try_from(weights: &[f64]) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl TryFrom<Vec<f64>> for AliasTable {
    type Error = InvalidInput;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(&weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn frequencies(table: &AliasTable, rng: &mut StdRng, draws: usize) -> Vec<f64> {
        let mut counts = vec![0usize; table.len()];
        for _ in 0..draws {
            counts[table.sample_index(rng)] += 1;
        }
        counts
            .into_iter()
            .map(|c| c as f64 / draws as f64)
            .collect()
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(AliasTable::new(&[]), Err(InvalidInput::EmptyWeights));
        assert_eq!(
            AliasTable::from_optional(None),
            Err(InvalidInput::MissingWeights)
        );
        assert!(matches!(
            AliasTable::new(&[0.3, f64::NAN]),
            Err(InvalidInput::NonNumericWeight { index: 1, .. })
        ));
        assert!(matches!(
            AliasTable::new(&[-0.1, 0.2]),
            Err(InvalidInput::NegativeWeight { index: 0, .. })
        ));
    }

    #[test]
    fn fifo_pairing_builds_expected_tables() {
        log_init_test();
        let table = AliasTable::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let want = [0.4, 0.8, 0.6, 1.0];
        for (got, want) in table.probabilities().iter().zip(want) {
            assert!((got - want).abs() < 1e-9, "{:?}", table.probabilities());
        }
        assert_eq!(&table.aliases()[..3], &[2, 3, 3]);
        assert_eq!(table.aliases()[3], 3);
    }

    #[test]
    fn tables_are_well_formed() {
        let table = AliasTable::new(&[0.05, 0.0, 7.0, 1.5, 0.25, 3.0, 0.0]).unwrap();
        let n = table.len();
        for (&p, &a) in table.probabilities().iter().zip(table.aliases()) {
            assert!((-1e-9..=1.0 + 1e-9).contains(&p), "p={p}");
            assert!(a < n);
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let w = [0.3, 0.1, 0.25, 0.05, 0.2];
        assert_eq!(AliasTable::new(&w).unwrap(), AliasTable::new(&w).unwrap());
    }

    #[test]
    fn tables_reproduce_normalized_distribution() {
        let table = AliasTable::new(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        for (i, want) in [0.1, 0.2, 0.3, 0.4].into_iter().enumerate() {
            assert!((table.outcome_probability(i) - want).abs() < 1e-9);
        }
        assert_eq!(table.outcome_probability(4), 0.0);
    }

    #[test]
    fn roughly_matches_distribution() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[0.5, 0.5], &[0.5, 0.5]),
            (&[5.0, 5.0], &[0.5, 0.5]),
            (&[0.1, 0.2, 0.3, 0.4], &[0.1, 0.2, 0.3, 0.4]),
            (&[0.1, 0.2, 0.3], &[0.1, 0.2, 0.3, 0.4]),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for (weights, want) in cases {
            let table = AliasTable::new(weights).unwrap();
            assert_eq!(table.len(), want.len());
            let got = frequencies(&table, &mut rng, 100_000);
            for (i, (g, w)) in got.iter().zip(want).enumerate() {
                assert!((g - w).abs() < 0.01, "weights={weights:?} i={i} emp={g} p={w}");
            }
        }
    }

    #[test]
    fn huge_weights_keep_their_proportions() {
        let table = AliasTable::new(&[1e308, 1e308, 1.0]).unwrap();
        assert!((table.outcome_probability(0) - 0.5).abs() < 1e-9);
        assert!((table.outcome_probability(1) - 0.5).abs() < 1e-9);
        assert!(table.outcome_probability(2) < 1e-300);

        let mut rng = StdRng::seed_from_u64(42);
        let got = frequencies(&table, &mut rng, 100_000);
        assert!((got[0] - 0.5).abs() < 0.01, "{got:?}");
        assert!(got[2] < 0.001, "{got:?}");
    }

    #[test]
    fn augmented_tail_is_drawn() {
        let table = AliasTable::new(&[0.1, 0.2, 0.3]).unwrap();
        assert!(table.augmented());
        let mut rng = StdRng::seed_from_u64(7);
        assert!((0..10_000).any(|_| table.sample_index(&mut rng) == 3));
    }

    #[test]
    fn zero_weights_only_hit_synthetic_outcome() {
        let table = AliasTable::new(&[0.0, 0.0]).unwrap();
        assert_eq!(table.len(), 3);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(table.sample_index(&mut rng), 2);
        }
    }

    #[test]
    fn degenerate_singleton() {
        for w in [1.0, 5.0] {
            let table = AliasTable::new(&[w]).unwrap();
            assert_eq!(table.len(), 1);
            let mut rng = rand::rng();
            for _ in 0..1000 {
                assert_eq!(table.sample_index(&mut rng), 0);
            }
        }
    }

    #[test]
    fn works_as_a_distribution() {
        let table = AliasTable::try_from(vec![1.0, 3.0]).unwrap();
        let rng = StdRng::seed_from_u64(11);
        assert!(table.sample_iter(rng).take(1000).all(|i| i < 2));
    }
}
