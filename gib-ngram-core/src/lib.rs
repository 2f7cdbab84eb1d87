//! N-gram statistics for gibberish detection.
//!
//! This crate computes, for a fixed n-gram length, a table covering every
//! possible lowercase n-gram with:
//! - the number of distinct corpus strings containing it
//! - its total number of occurrences across the corpus
//! - a modified inverse document frequency (IDF) score
//!
//! The table is meant to be consumed by a downstream scorer that sums or
//! averages the IDF of a candidate string's n-grams. Rendering a verdict,
//! loading corpora and persisting tables are left to the caller.

/// Core n-gram statistics: alphabet, universe, tabulation, scoring.
pub mod model;

/// Table construction parameters.
pub mod config;

/// Error type shared by every fallible operation.
pub mod error;

/// String windowing helpers.
pub mod text;

pub use config::TableConfig;
pub use error::NgramError;
pub use model::score::{NGramScores, Score, ZeroMatch};
pub use model::stats::ngram_values;
