use std::collections::HashSet;

use gib_ngram_core::model::tabulator::CorpusTabulation;
use gib_ngram_core::model::universe::all_ngrams;
use gib_ngram_core::{ngram_values, NGramScores, Score, TableConfig, ZeroMatch};
use rand::seq::SliceRandom;

fn sample_corpus() -> Vec<String> {
	[
		"The quick brown fox",
		"jumps over the lazy dog",
		"Hello world",
		"hello again",
		"gibberish detection",
		"qwzxkj",
		"mississippi",
		"R2D2 and C-3PO",
		"",
		"a",
	]
	.iter()
	.map(|s| s.to_string())
	.collect()
}

fn table(corpus: &[String], n: usize) -> NGramScores {
	ngram_values(corpus, &TableConfig::new(n).unwrap()).unwrap()
}

#[test]
fn test_key_set_is_the_universe() {
	for n in 1..=3 {
		let table = table(&sample_corpus(), n);
		let keys: HashSet<&str> = table.keys().collect();
		let universe = all_ngrams(n).unwrap();
		let expected: HashSet<&str> = universe.iter().map(String::as_str).collect();

		assert_eq!(keys, expected);
		assert!(table.keys().all(|key| key.chars().count() == n));
	}
}

#[test]
fn test_string_frequency_never_exceeds_total_frequency() {
	let table = table(&sample_corpus(), 2);
	for (ngram, score) in table.iter() {
		assert!(score.string_frequency <= score.total_frequency, "{}", ngram);
		if score.observed {
			assert!(score.string_frequency >= 1, "{}", ngram);
		}
	}
}

#[test]
fn test_unobserved_entries_are_zero() {
	let table = table(&sample_corpus(), 2);
	assert_eq!(table.get("qq"), Some(&Score::default()));
	assert_eq!(table.get("zx"), Some(&Score::observed(1, 1, (10.0f64 / 2.0).log2())));
}

#[test]
fn test_matches_tabulation() {
	let corpus = sample_corpus();
	let tabulation = CorpusTabulation::from_corpus(2, &corpus);
	let table = table(&corpus, 2);

	let ss = table.get("ss").unwrap();
	assert_eq!(ss.total_frequency, tabulation.total_frequency("ss"));
	assert_eq!(ss.total_frequency, 2);
	assert_eq!(ss.string_frequency, 1);
	assert_eq!(tabulation.max_freq(), tabulation.counts().values().copied().max().unwrap());
}

#[test]
fn test_order_independent() {
	let mut corpus = sample_corpus();
	let expected = table(&corpus, 2);

	let mut rng = rand::rng();
	for _ in 0..5 {
		corpus.shuffle(&mut rng);
		assert_eq!(table(&corpus, 2), expected);
	}
}

#[test]
fn test_parallel_matches_sequential() {
	let corpus = sample_corpus();
	let sequential = table(&corpus, 3);

	for workers in [1, 2, 4, 32] {
		let mut config = TableConfig::new(3).unwrap();
		config.workers = workers;
		assert_eq!(ngram_values(&corpus, &config).unwrap(), sequential);
	}
}

#[test]
fn test_adjust_leaves_no_unseen_zero() {
	let corpus = sample_corpus();
	let config = TableConfig::new(2).unwrap().with_re_adjust(ZeroMatch::Unobserved);
	let table = ngram_values(&corpus, &config).unwrap();

	// 10 strings, rarest n-grams score log2(10 / 2) ~ 2.32
	assert_eq!(table.highest_observed_idf().ceil(), 3.0);
	for (_, score) in table.iter().filter(|(_, score)| !score.observed) {
		assert_eq!(*score, Score::unobserved(3.0));
	}
	assert!(table.iter().all(|(_, score)| score.observed || score.idf != 0.0));
}

#[test]
fn test_zero_score_mode_rewrites_every_zero() {
	// 4 strings: n-grams in exactly 3 of them score log2(4 / 4) = 0
	let corpus: Vec<String> = ["abx", "aby", "abz", "cd"].iter().map(|s| s.to_string()).collect();
	let config = TableConfig::new(2).unwrap().with_re_adjust(ZeroMatch::ZeroScore);
	let table = ngram_values(&corpus, &config).unwrap();

	assert_eq!(table.get("ab"), Some(&Score::unobserved(1.0)));
	assert!(table.iter().all(|(_, score)| score.idf != 0.0));
}
