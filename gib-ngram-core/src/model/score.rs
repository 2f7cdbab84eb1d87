use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::NgramError;

/// Statistics of a single n-gram.
///
/// An unobserved n-gram has zero frequencies and, until the table is
/// adjusted, a zero IDF. The `observed` flag tells it apart from an
/// observed n-gram whose IDF happens to be exactly 0.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Score {
	/// Number of distinct corpus strings containing the n-gram.
	pub string_frequency: usize,
	/// Total occurrences across the corpus, repeats included.
	pub total_frequency: usize,
	/// Modified IDF, or the smoothed value after adjustment.
	pub idf: f64,
	/// Whether the n-gram was seen in the corpus.
	pub observed: bool,
}

impl Score {
	/// Score of an n-gram seen in the corpus.
	pub fn observed(string_frequency: usize, total_frequency: usize, idf: f64) -> Self {
		Self { string_frequency, total_frequency, idf, observed: true }
	}

	/// Score of an n-gram never seen in the corpus, with the given IDF.
	pub fn unobserved(idf: f64) -> Self {
		Self { string_frequency: 0, total_frequency: 0, idf, observed: false }
	}

	/// The `(string frequency, total frequency, idf)` triple.
	pub fn as_triple(&self) -> [f64; 3] {
		[self.string_frequency as f64, self.total_frequency as f64, self.idf]
	}
}

/// Selects which entries [`NGramScores::adjust`] treats as unseen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZeroMatch {
	/// Rewrite entries never observed in the corpus. The smoothed value is
	/// derived from observed entries only.
	#[default]
	Unobserved,
	/// Rewrite every entry whose IDF is exactly 0, observed or not, and reset
	/// its frequencies. Matches tables produced by the legacy zero-score rule.
	ZeroScore,
}

/// Table of scores keyed by every n-gram of a given length.
///
/// # Invariants
/// - The key set is fixed at construction; [`NGramScores::set`] never adds keys
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NGramScores {
	scores: HashMap<String, Score>,
}

impl NGramScores {
	/// Builds a table from parallel key and value sequences.
	///
	/// # Errors
	/// Returns [`NgramError::LengthMismatch`] if the sequences differ in length.
	pub fn from_parts(keys: Vec<String>, values: Vec<Score>) -> Result<Self, NgramError> {
		if keys.len() != values.len() {
			return Err(NgramError::LengthMismatch { keys: keys.len(), values: values.len() });
		}
		Ok(Self { scores: keys.into_iter().zip(values).collect() })
	}

	/// Overwrites the score of an existing n-gram.
	///
	/// Returns `false`, leaving the table untouched, if `ngram` is not a key.
	pub fn set(&mut self, ngram: &str, score: Score) -> bool {
		match self.scores.get_mut(ngram) {
			Some(existing) => {
				*existing = score;
				true
			}
			None => false,
		}
	}

	pub fn get(&self, ngram: &str) -> Option<&Score> {
		self.scores.get(ngram)
	}

	/// IDF of `ngram`, or `None` if it is not a key of the table.
	pub fn idf(&self, ngram: &str) -> Option<f64> {
		self.scores.get(ngram).map(|score| score.idf)
	}

	pub fn len(&self) -> usize {
		self.scores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}

	pub fn contains(&self, ngram: &str) -> bool {
		self.scores.contains_key(ngram)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.scores.keys().map(String::as_str)
	}

	/// Iterates over `(ngram, score)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Score)> {
		self.scores.iter().map(|(ngram, score)| (ngram.as_str(), score))
	}

	/// Number of entries seen in the corpus.
	pub fn observed_count(&self) -> usize {
		self.scores.values().filter(|score| score.observed).count()
	}

	/// Highest IDF over all entries, never below 0.
	pub fn highest_idf(&self) -> f64 {
		self.scores.values().fold(0.0, |max, score| f64::max(max, score.idf))
	}

	/// Highest IDF over observed entries, never below 0.
	pub fn highest_observed_idf(&self) -> f64 {
		self.scores
			.values()
			.filter(|score| score.observed)
			.fold(0.0, |max, score| f64::max(max, score.idf))
	}

	/// Smooths the scores of unseen n-grams.
	///
	/// Every entry selected by `mode` is replaced with zero frequencies and an
	/// IDF equal to the ceiling of the highest IDF, so unseen n-grams read as
	/// maximally rare instead of maximally common.
	///
	/// Applying the same mode twice gives the same table as applying it once.
	///
	/// Returns the number of rewritten entries.
	pub fn adjust(&mut self, mode: ZeroMatch) -> usize {
		let max_idf = match mode {
			ZeroMatch::Unobserved => self.highest_observed_idf(),
			ZeroMatch::ZeroScore => self.highest_idf(),
		}
		.ceil();

		let mut adjusted = 0;
		for score in self.scores.values_mut() {
			let unseen = match mode {
				ZeroMatch::Unobserved => !score.observed,
				ZeroMatch::ZeroScore => score.idf == 0.0,
			};
			if unseen {
				*score = Score::unobserved(max_idf);
				adjusted += 1;
			}
		}

		debug!("Adjusted {} entries to idf {} ({:?})", adjusted, max_idf, mode);
		adjusted
	}
}
