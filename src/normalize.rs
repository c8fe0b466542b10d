//! Input validation and the scaling step that makes weights sum to one.

use crate::error::InvalidInput;

/// A weight total within this distance of 1 counts as exactly 1.
///
/// Such totals are rescaled by themselves instead of growing the list, so
/// rounding in sums like `0.1 + 0.2 + 0.3 + 0.4` never appends a ~1e-16 outcome.
pub const SUM_TOLERANCE: f64 = 1e-12;

/// Weights scaled so they sum to one, ready for the table fill.
///
/// When the caller's weights summed to less than one, a final synthetic
/// outcome carrying the leftover mass was appended and `augmented` is set;
/// `len()` is then `original_len() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub probabilities: Vec<f64>,
    pub augmented: bool,
}

impl Normalized {
    /// Effective outcome count.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Number of outcomes the caller supplied.
    pub fn original_len(&self) -> usize {
        self.len() - usize::from(self.augmented)
    }
}

/// Check that `weights` is non-empty and every entry is a finite,
/// non-negative number. Reports the first offending index.
pub fn validate(weights: &[f64]) -> Result<(), InvalidInput> {
    if weights.is_empty() {
        return Err(InvalidInput::EmptyWeights);
    }
    for (index, &w) in weights.iter().enumerate() {
        if !w.is_finite() {
            return Err(InvalidInput::NonNumericWeight {
                index,
                found: w.to_string(),
            });
        }
        // -0.0 is allowed through
        if w < 0.0 {
            return Err(InvalidInput::NegativeWeight { index, value: w });
        }
    }
    Ok(())
}

/// Validate `weights` and scale a copy of them to sum to one.
///
/// * total > 1: every weight is divided by the total.
/// * total < 1: one extra outcome of weight `1 - total` is appended.
/// * total == 1 (within [`SUM_TOLERANCE`]): divided by the total, which
///   leaves an exact 1 untouched.
///
/// An all-zero list has total 0 and gains a single synthetic outcome of
/// weight 1. Finite weights whose sum overflows are first divided by the
/// largest weight, so the total stays finite.
pub fn scale_for_alias_method(weights: &[f64]) -> Result<Normalized, InvalidInput> {
    validate(weights)?;

    let mut probabilities = weights.to_vec();
    let mut total: f64 = probabilities.iter().sum();
    if !total.is_finite() {
        let max = probabilities.iter().copied().fold(0.0f64, f64::max);
        probabilities.iter_mut().for_each(|p| *p /= max);
        total = probabilities.iter().sum();
    }
    let mut augmented = false;

    if total > 1.0 || (total - 1.0).abs() <= SUM_TOLERANCE {
        if total != 1.0 {
            probabilities.iter_mut().for_each(|p| *p /= total);
        }
    } else {
        probabilities.push(1.0 - total);
        augmented = true;
    }

    Ok(Normalized {
        probabilities,
        augmented,
    })
}

/// Parse a weight list such as `"10, 20 30,40"`.
///
/// Tokens are separated by commas and/or whitespace. The first token that
/// does not parse as a finite number is reported as
/// [`InvalidInput::NonNumericWeight`] with its position in the list.
pub fn parse_weights(s: &str) -> Result<Vec<f64>, InvalidInput> {
    let weights = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<f64>()
                .map_err(|_| InvalidInput::NonNumericWeight {
                    index,
                    found: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate(&weights)?;
    Ok(weights)
}
