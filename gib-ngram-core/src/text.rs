/// Returns every contiguous window of `n` characters in `s`, left to right.
///
/// Repeated windows are kept, so `"aaa"` with `n = 2` yields `["aa", "aa"]`.
/// Windows are taken over Unicode scalar values, not bytes.
///
/// Returns an empty vector if `n == 0` or if `s` is shorter than `n`.
pub fn ngrams_from_string(s: &str, n: usize) -> Vec<String> {
	if n == 0 {
		return Vec::new();
	}
	let chars: Vec<char> = s.chars().collect();
	if chars.len() < n {
		// Too short, no n-grams to compute
		return Vec::new();
	}

	chars.windows(n).map(|window| window.iter().collect()).collect()
}

/// Lower-cases a corpus string the same way for tabulation and lookup.
pub fn normalize(s: &str) -> String {
	s.to_lowercase()
}
