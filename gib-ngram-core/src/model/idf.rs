use crate::error::NgramError;

/// Computes the modified IDF score of an n-gram:
/// `log2(total_strings / (1 + string_freq))`.
///
/// The score strictly decreases as `string_freq` grows: n-grams found in
/// many strings score low, rare ones score high. It may be negative when
/// an n-gram appears in (almost) every string.
///
/// `total_freq` and `max_freq` do not affect the result. They are kept in
/// the signature so that scoring variants weighting raw occurrence counts
/// can be introduced without changing callers.
///
/// # Errors
/// Returns [`NgramError::InvalidArgument`] if `total_strings == 0`.
pub fn idf_score(
	total_strings: usize,
	string_freq: usize,
	_total_freq: usize,
	_max_freq: usize,
) -> Result<f64, NgramError> {
	if total_strings == 0 {
		return Err(NgramError::InvalidArgument("total_strings must be >= 1".to_owned()));
	}
	Ok((total_strings as f64 / (1.0 + string_freq as f64)).log2())
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	#[test]
	fn test_known_values() {
		assert!((idf_score(2, 1, 1, 2).unwrap() - 0.0).abs() < EPSILON);
		assert!((idf_score(2, 2, 2, 2).unwrap() - (2.0f64 / 3.0).log2()).abs() < EPSILON);
		assert!((idf_score(8, 0, 0, 0).unwrap() - 3.0).abs() < EPSILON);
		assert!((idf_score(1024, 3, 9, 9).unwrap() - 8.0).abs() < EPSILON);
	}

	#[test]
	fn test_strictly_decreasing_in_string_freq() {
		for total in [1, 2, 10, 1000] {
			let scores: Vec<f64> = (0..50).map(|freq| idf_score(total, freq, 0, 0).unwrap()).collect();
			assert!(scores.windows(2).all(|pair| pair[0] > pair[1]));
		}
	}

	#[test]
	fn test_ignores_total_and_max_freq() {
		let base = idf_score(10, 3, 3, 3).unwrap();
		assert_eq!(idf_score(10, 3, 400, 9000).unwrap(), base);
	}

	#[test]
	fn test_empty_corpus_is_rejected() {
		assert!(matches!(idf_score(0, 0, 0, 0), Err(NgramError::InvalidArgument(_))));
	}
}
