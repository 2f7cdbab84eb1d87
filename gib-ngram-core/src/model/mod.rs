//! N-gram statistics over a corpus of strings.
//!
//! Components, leaves first:
//! - The lowercase alphabet (`alphabet`)
//! - Enumeration of every possible n-gram (`universe`)
//! - Distinct-string index per n-gram (`occurrence_set`)
//! - Corpus tabulation, sequential or parallel (`tabulator`)
//! - The modified IDF formula (`idf`)
//! - Score table and smoothing of unseen n-grams (`score`)
//! - Table construction (`stats`)

/// The fixed lowercase alphabet.
pub mod alphabet;

/// Enumeration of all n-grams of a given length.
pub mod universe;

/// N-gram to distinct-strings index.
pub mod occurrence_set;

/// Occurrence counting over a corpus.
///
/// Supports chunked multi-threaded tabulation and merging.
pub mod tabulator;

/// Modified inverse document frequency.
pub mod idf;

/// Per n-gram scores and the smoothing pass.
pub mod score;

/// Builds the full score table from a corpus.
pub mod stats;
