use super::alphabet::ALPHABET;
use crate::error::NgramError;

/// Largest n-gram length accepted when enumerating the universe.
///
/// The universe holds 26^n strings; 26^5 is already close to 12 million.
pub const MAX_NGRAM_LEN: usize = 5;

/// Number of n-grams of length `n` over the alphabet (26^n, 0 for n = 0).
pub fn universe_size(n: usize) -> usize {
	if n == 0 {
		return 0;
	}
	ALPHABET.len().pow(n as u32)
}

/// Enumerates every possible n-gram of length `n` over [`ALPHABET`].
///
/// The result is exhaustive, has no duplicates and is ordered with the
/// leading letter varying slowest (`"aa", "ab", ..., "az", "ba", ...`).
///
/// # Errors
/// Returns [`NgramError::InvalidArgument`] if `n > MAX_NGRAM_LEN`.
pub fn all_ngrams(n: usize) -> Result<Vec<String>, NgramError> {
	if n > MAX_NGRAM_LEN {
		return Err(NgramError::InvalidArgument(format!(
			"n-gram length must be <= {}, got {}",
			MAX_NGRAM_LEN, n
		)));
	}
	if n == 0 {
		return Ok(Vec::new());
	}

	// Grow suffixes one letter at a time, prepending each letter in order.
	let mut ngrams: Vec<String> = ALPHABET.iter().map(|c| c.to_string()).collect();
	for length in 2..=n {
		let mut longer = Vec::with_capacity(universe_size(length));
		for letter in ALPHABET {
			for suffix in &ngrams {
				let mut ngram = String::with_capacity(length);
				ngram.push(letter);
				ngram.push_str(suffix);
				longer.push(ngram);
			}
		}
		ngrams = longer;
	}

	Ok(ngrams)
}
