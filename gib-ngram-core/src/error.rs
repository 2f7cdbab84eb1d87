use thiserror::Error;

/// Errors raised by n-gram statistics operations.
///
/// Every variant is a caller contract violation; nothing here is transient
/// and nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NgramError {
	/// An argument is outside the accepted domain (n-gram length too large,
	/// empty corpus size passed to the scorer, ...).
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A score table was built from key and value sequences of different lengths.
	#[error("Length mismatch: {keys} keys for {values} values")]
	LengthMismatch { keys: usize, values: usize },

	/// Two tabulations of different n-gram lengths were merged.
	#[error("N mismatch: expected {expected}, found {found}")]
	NgramLengthMismatch { expected: usize, found: usize },

	/// A tabulation worker thread did not deliver its partial result.
	#[error("Tabulation worker failed: {0}")]
	Worker(String),
}
