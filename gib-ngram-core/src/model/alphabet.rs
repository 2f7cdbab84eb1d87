/// The 26 lowercase ASCII letters n-grams are enumerated over, in order.
pub const ALPHABET: [char; 26] = [
	'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
	'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Returns `true` if every character of `ngram` belongs to [`ALPHABET`].
///
/// The empty string is vacuously in the alphabet.
pub fn is_alphabet_ngram(ngram: &str) -> bool {
	ngram.chars().all(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_alphabet_is_ordered_lowercase() {
		assert_eq!(ALPHABET.len(), 26);
		assert_eq!(ALPHABET[0], 'a');
		assert_eq!(ALPHABET[25], 'z');
		assert!(ALPHABET.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn test_is_alphabet_ngram() {
		assert!(is_alphabet_ngram("abz"));
		assert!(!is_alphabet_ngram("a1"));
		assert!(!is_alphabet_ngram("a b"));
		assert!(!is_alphabet_ngram("Ab"));
		assert!(!is_alphabet_ngram("éa"));
	}
}
