use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Records which distinct strings contain each n-gram.
///
/// Conceptually an inverted index from n-gram to the set of corpus strings
/// it was seen in. Membership has set semantics: adding the same
/// `(ngram, string)` pair twice is a no-op.
///
/// ## Responsibilities:
/// - Accumulate n-gram to string memberships during tabulation
/// - Report the string frequency of an n-gram
/// - Merge with another set (parallel tabulation support)
///
/// ## Invariants
/// - Every stored set is non-empty
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NGramSet {
	/// Distinct strings per n-gram.
	/// Example: { "ab" => {"aab", "abc"}, "bc" => {"abc"} }
	set: HashMap<String, HashSet<String>>,
}

impl NGramSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `string` contains `ngram`.
	///
	/// Returns `true` if the pair was not present yet.
	pub fn add(&mut self, ngram: &str, string: &str) -> bool {
		match self.set.get_mut(ngram) {
			Some(strings) => {
				if strings.contains(string) {
					return false;
				}
				strings.insert(string.to_owned())
			}
			None => {
				self.set.insert(ngram.to_owned(), HashSet::from([string.to_owned()]));
				true
			}
		}
	}

	/// Returns the distinct strings containing `ngram`, if any.
	pub fn strings(&self, ngram: &str) -> Option<&HashSet<String>> {
		self.set.get(ngram)
	}

	/// Number of distinct strings containing `ngram` (0 if never added).
	pub fn string_frequency(&self, ngram: &str) -> usize {
		self.set.get(ngram).map_or(0, HashSet::len)
	}

	/// Iterates over `(ngram, strings)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
		self.set.iter().map(|(ngram, strings)| (ngram.as_str(), strings))
	}

	/// Number of distinct n-grams recorded.
	pub fn len(&self) -> usize {
		self.set.len()
	}

	pub fn is_empty(&self) -> bool {
		self.set.is_empty()
	}

	/// Merges another set into this one (per n-gram union).
	pub fn merge(&mut self, other: &Self) {
		for (ngram, strings) in &other.set {
			self.set
				.entry(ngram.clone())
				.or_default()
				.extend(strings.iter().cloned());
		}
	}
}
