//! # vose_alias
//!
//! Loaded dice: O(1) draws from a fixed discrete distribution.
//!
//! This crate implements Vose's variant of the
//! [alias method](https://en.wikipedia.org/wiki/Alias_method). An O(n) setup
//! pass turns a list of weights into two tables, `probability` and `alias`;
//! every draw afterwards is one uniform column pick plus one biased coin.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vose_alias::AliasSampler;
//!
//! # fn main() -> Result<(), vose_alias::InvalidInput> {
//! let mut die = AliasSampler::new(&[10.0, 20.0, 30.0, 40.0])?;
//! let face = die.next(); // 0..4, face 3 four times as often as face 0
//! assert!(face < die.size());
//! # Ok(()) }
//! ```
//!
//! Bring your own RNG with [`AliasSampler::with_rng`], or keep the tables
//! apart from any RNG with [`AliasTable`], which also implements
//! [`rand::distr::Distribution<usize>`].
//!
//! ## Normalization
//! Weights are scaled to sum to one before the tables are built:
//! * `[10, 20, 30, 40]` becomes `[.1, .2, .3, .4]`
//! * `[5, 5]` becomes `[.5, .5]`
//! * `[.1, .2, .3]` becomes `[.1, .2, .3, .4]`
//!
//! The last case **adds an outcome**: when the weights sum to less than one,
//! index `weights.len()` carries the leftover mass. Always size histograms by
//! [`AliasSampler::size`] (or [`AliasTable::len`]), not by the input length.
//!
//! ## Performance
//! * **Build**: O(n) time and space; each pairing retires one worklist entry.
//! * **Sample**: O(1) per draw (1 uniform integer, 1 uniform float, 1 branch).
//! * **Space**: 2 vectors of length `n` (f64 + usize).
//!
//! ## Gotchas
//! * Weights must be finite and non-negative; empty lists are rejected.
//! * Tables are immutable. If the weights change, build a new sampler.
//! * Not for cryptographic use: randomness comes from whatever `rand::Rng`
//!   backs the sampler.
//!
//! ## Logging
//! Table construction reports through the [`log`] facade (`debug` per table,
//! `trace` per column pairing). Drawing never logs.

mod error;
mod normalize;
mod sampler;
mod table;

pub use error::InvalidInput;
pub use normalize::{Normalized, SUM_TOLERANCE, parse_weights, scale_for_alias_method, validate};
pub use sampler::AliasSampler;
pub use table::AliasTable;
