use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use log::debug;
use serde::{Deserialize, Serialize};

use super::occurrence_set::NGramSet;
use crate::error::NgramError;
use crate::text::{ngrams_from_string, normalize};

/// Raw n-gram statistics gathered from a corpus.
///
/// Holds, for a fixed n-gram length `n`:
/// - `counts`: total occurrences of each n-gram, repeats included
/// - `occurrences`: distinct (lower-cased) strings containing each n-gram
/// - `num_strings`: number of strings processed, duplicates included
///
/// Tabulation does not depend on corpus order, so partial tabulations built
/// over disjoint chunks can be merged into the same result.
///
/// # Invariants
/// - `occurrences.string_frequency(g) <= counts[g]` for every n-gram `g`
/// - `counts` and `occurrences` have the same key set
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CorpusTabulation {
	n: usize,
	num_strings: usize,
	counts: HashMap<String, usize>,
	occurrences: NGramSet,
}

impl CorpusTabulation {
	/// Creates an empty tabulation for n-grams of length `n`.
	pub fn new(n: usize) -> Self {
		Self { n, num_strings: 0, counts: HashMap::new(), occurrences: NGramSet::new() }
	}

	/// Tabulates a whole corpus on the current thread.
	pub fn from_corpus<S: AsRef<str>>(n: usize, corpus: &[S]) -> Self {
		let mut tabulation = Self::new(n);
		for s in corpus {
			tabulation.add_string(s.as_ref());
		}
		tabulation
	}

	/// Tabulates a corpus by splitting it into chunks processed on `workers` threads.
	///
	/// # Behavior
	/// - `workers == 0` uses one thread per logical CPU.
	/// - Each thread builds a partial tabulation of its chunk.
	/// - Partial tabulations are collected over a channel and merged.
	///
	/// # Errors
	/// Returns [`NgramError::Worker`] if a thread exits without sending its result.
	pub fn from_corpus_parallel<S: AsRef<str>>(
		n: usize,
		corpus: &[S],
		workers: usize,
	) -> Result<Self, NgramError> {
		let workers = if workers == 0 { num_cpus::get() } else { workers };
		if workers <= 1 || corpus.len() < 2 {
			return Ok(Self::from_corpus(n, corpus));
		}

		let chunk_size = corpus.len().div_ceil(workers);
		debug!("Tabulating {} strings on {} workers (chunk size {})", corpus.len(), workers, chunk_size);

		let (tx, rx) = mpsc::channel();
		let mut spawned = 0;
		for chunk in corpus.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.iter().map(|s| s.as_ref().to_owned()).collect();

			thread::spawn(move || {
				let partial = Self::from_corpus(n, &chunk);
				// The receiver outlives every sender, ignore the impossible error
				let _ = tx.send(partial);
			});
			spawned += 1;
		}
		drop(tx);

		let mut tabulation = Self::new(n);
		let mut received = 0;
		for partial in rx.iter() {
			tabulation.merge(&partial)?;
			received += 1;
		}

		if received != spawned {
			return Err(NgramError::Worker(format!(
				"{} of {} workers returned no tabulation",
				spawned - received,
				spawned
			)));
		}

		Ok(tabulation)
	}

	/// Adds one corpus string.
	///
	/// The string is lower-cased, then every window of `n` characters is
	/// counted once per occurrence and the string is recorded once per
	/// distinct n-gram.
	pub fn add_string(&mut self, s: &str) {
		let s = normalize(s);
		self.num_strings += 1;
		for ngram in ngrams_from_string(&s, self.n) {
			self.occurrences.add(&ngram, &s);
			*self.counts.entry(ngram).or_insert(0) += 1;
		}
	}

	/// Merges another tabulation of the same n-gram length into this one.
	///
	/// Counts and string totals are summed, occurrence sets are unioned.
	///
	/// # Errors
	/// Returns an error if the n-gram lengths differ.
	pub fn merge(&mut self, other: &Self) -> Result<(), NgramError> {
		if self.n != other.n {
			return Err(NgramError::NgramLengthMismatch { expected: self.n, found: other.n });
		}

		for (ngram, count) in &other.counts {
			*self.counts.entry(ngram.clone()).or_insert(0) += *count;
		}
		self.occurrences.merge(&other.occurrences);
		self.num_strings += other.num_strings;

		Ok(())
	}

	/// N-gram length this tabulation was built for.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of strings processed (not distinct).
	pub fn num_strings(&self) -> usize {
		self.num_strings
	}

	/// Highest total occurrence count of any single n-gram (0 if none).
	pub fn max_freq(&self) -> usize {
		self.counts.values().copied().max().unwrap_or(0)
	}

	/// Total occurrences of `ngram` across the corpus.
	pub fn total_frequency(&self, ngram: &str) -> usize {
		self.counts.get(ngram).copied().unwrap_or(0)
	}

	/// Number of distinct corpus strings containing `ngram`.
	pub fn string_frequency(&self, ngram: &str) -> usize {
		self.occurrences.string_frequency(ngram)
	}

	pub fn counts(&self) -> &HashMap<String, usize> {
		&self.counts
	}

	pub fn occurrences(&self) -> &NGramSet {
		&self.occurrences
	}
}
