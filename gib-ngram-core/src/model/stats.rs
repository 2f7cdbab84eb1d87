use log::{debug, info, warn};

use super::alphabet::is_alphabet_ngram;
use super::idf::idf_score;
use super::score::{NGramScores, Score};
use super::tabulator::CorpusTabulation;
use super::universe::all_ngrams;
use crate::config::TableConfig;
use crate::error::NgramError;

/// Computes n-gram statistics across a corpus of strings.
///
/// # Behavior
/// - Tabulates the corpus (on `config.workers` threads if non-zero).
/// - Builds a table keyed by every possible n-gram of length `config.n()`.
/// - Scores each observed n-gram with [`idf_score`]; the rest stay at zero.
/// - Smooths unseen entries if `config.re_adjust` is set.
///
/// An empty corpus yields an all-zero table (or an all-smoothed one, at 0).
///
/// # Errors
/// Returns an error if the configuration is invalid or a worker fails.
pub fn ngram_values<S: AsRef<str>>(corpus: &[S], config: &TableConfig) -> Result<NGramScores, NgramError> {
	config.validate()?;

	let tabulation = match config.workers {
		0 => CorpusTabulation::from_corpus(config.n(), corpus),
		workers => CorpusTabulation::from_corpus_parallel(config.n(), corpus, workers)?,
	};
	if tabulation.num_strings() == 0 {
		warn!("Empty corpus, every n-gram is left unobserved");
	}

	let mut table = ngram_scores(&tabulation)?;
	if config.re_adjust {
		table.adjust(config.zero_match);
	}

	info!(
		"Built {}-gram table: {} strings, {} of {} n-grams observed, highest idf {}",
		config.n(),
		tabulation.num_strings(),
		table.observed_count(),
		table.len(),
		table.highest_idf()
	);
	Ok(table)
}

/// Merges a tabulation into a table covering the whole n-gram universe.
///
/// Every n-gram starts at a zero, unobserved score. Observed n-grams made of
/// alphabet letters are overwritten with their frequencies and IDF. N-grams
/// containing other characters (digits, spaces, accents, ...) are counted
/// by the tabulation but have no entry in the table.
pub fn ngram_scores(tabulation: &CorpusTabulation) -> Result<NGramScores, NgramError> {
	let keys = all_ngrams(tabulation.n())?;
	let values = vec![Score::default(); keys.len()];
	let mut table = NGramScores::from_parts(keys, values)?;

	let num_strings = tabulation.num_strings();
	let max_freq = tabulation.max_freq();
	let mut skipped = 0;

	for (ngram, strings) in tabulation.occurrences().iter() {
		if !is_alphabet_ngram(ngram) {
			skipped += 1;
			continue;
		}
		let string_freq = strings.len();
		let total_freq = tabulation.total_frequency(ngram);
		let idf = idf_score(num_strings, string_freq, total_freq, max_freq)?;
		table.set(ngram, Score::observed(string_freq, total_freq, idf));
	}

	if skipped > 0 {
		debug!("Skipped {} n-grams outside the alphabet", skipped);
	}
	Ok(table)
}
