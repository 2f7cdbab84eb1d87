use serde::{Deserialize, Serialize};

use crate::error::NgramError;
use crate::model::score::ZeroMatch;
use crate::model::universe::MAX_NGRAM_LEN;

/// Parameters for building an n-gram score table.
///
/// # Responsibilities
/// - Hold the n-gram length and post-processing options
/// - Reject lengths whose universe would be too large to enumerate
///
/// Deserializable with defaults for every missing field, e.g.
/// `{"n": 2, "re_adjust": true}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TableConfig {
	/// N-gram length (0..=MAX_NGRAM_LEN).
	n: usize,

	/// Whether unseen n-grams get the smoothed maximum IDF.
	pub re_adjust: bool,

	/// Which entries the smoothing pass rewrites.
	pub zero_match: ZeroMatch,

	/// Tabulation threads: 0 tabulates on the calling thread.
	pub workers: usize,
}

impl Default for TableConfig {
	fn default() -> Self {
		Self { n: 3, re_adjust: false, zero_match: ZeroMatch::default(), workers: 0 }
	}
}

impl TableConfig {
	/// Creates a configuration for n-grams of length `n` with default options.
	///
	/// # Errors
	/// Returns an error if `n > MAX_NGRAM_LEN`.
	pub fn new(n: usize) -> Result<Self, NgramError> {
		let mut config = Self::default();
		config.set_n(n)?;
		Ok(config)
	}

	/// Returns the n-gram length.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Sets the n-gram length.
	///
	/// # Errors
	/// Returns an error if `n > MAX_NGRAM_LEN`.
	pub fn set_n(&mut self, n: usize) -> Result<(), NgramError> {
		Self::check_n(n)?;
		self.n = n;
		Ok(())
	}

	/// Enables smoothing with the given mode.
	pub fn with_re_adjust(mut self, zero_match: ZeroMatch) -> Self {
		self.re_adjust = true;
		self.zero_match = zero_match;
		self
	}

	/// Checks a configuration that may come from deserialization.
	pub fn validate(&self) -> Result<(), NgramError> {
		Self::check_n(self.n)
	}

	fn check_n(n: usize) -> Result<(), NgramError> {
		if n > MAX_NGRAM_LEN {
			return Err(NgramError::InvalidArgument(format!(
				"n-gram length must be <= {}, got {}",
				MAX_NGRAM_LEN, n
			)));
		}
		Ok(())
	}
}
