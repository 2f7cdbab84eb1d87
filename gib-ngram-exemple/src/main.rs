use gib_ngram_core::model::idf::idf_score;
use gib_ngram_core::{ngram_values, TableConfig, ZeroMatch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A tiny training corpus; real corpora are loaded by the caller
    let corpus = [
        "hello", "world", "language", "detection", "statistics", "corpus",
        "gibberish", "nonsense", "wonderful", "keyboard", "mountain", "river",
    ];

    // Trigrams, with unseen trigrams smoothed to the highest observed IDF
    let config = TableConfig::new(3)?.with_re_adjust(ZeroMatch::Unobserved);
    let table = ngram_values(&corpus, &config)?;

    println!("{} trigrams, {} observed", table.len(), table.observed_count());

    // Empty corpora cannot be scored
    match idf_score(0, 0, 0, 0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // Average IDF of a candidate's trigrams: higher reads as more unusual
    for candidate in ["wonder", "xqzvjk"] {
        let chars: Vec<char> = candidate.chars().collect();
        let scores: Vec<f64> = chars
            .windows(config.n())
            .filter_map(|w| table.idf(&w.iter().collect::<String>()))
            .collect();
        let average = scores.iter().sum::<f64>() / scores.len().max(1) as f64;
        log::debug!("{}: {:?}", candidate, scores);
        println!("{}: average idf {:.3}", candidate, average);
    }

    Ok(())
}
