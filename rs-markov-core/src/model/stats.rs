use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::tokenizer::Corpus;
use super::word_model::WordModel;

/// Number of ranked start words kept in `most_common_starts` by default.
pub const DEFAULT_TOP_STARTS: usize = 20;

/// Summary of a built model, as written to the statistics export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelStats {
	pub total_characters: usize,
	pub total_words: usize,
	/// Number of distinct contexts.
	pub unique_trigrams: usize,
	pub unique_start_words: usize,
	/// `(first token, continuation volume)` pairs, highest volume first.
	pub most_common_starts: Vec<(String, usize)>,
}

impl ModelStats {
	/// Derives the statistics from the outputs of tokenization and building.
	///
	/// The volume of a start word is the total number of continuations over
	/// every context it begins. Ties keep the order in which start words were
	/// first met, and only the `top_n` best are kept.
	pub fn compute<S: AsRef<str>>(corpus_text: &str, tokens: &[S], model: &WordModel, top_n: usize) -> Self {
		let mut volumes: IndexMap<&str, usize> = IndexMap::new();
		for (context, next) in model.iter() {
			*volumes.entry(context.first()).or_insert(0) += next.len();
		}
		let unique_start_words = volumes.len();

		let mut ranked: Vec<(String, usize)> = volumes
			.into_iter()
			.map(|(word, volume)| (word.to_owned(), volume))
			.collect();
		// Stable: equal volumes stay in first-seen order
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked.truncate(top_n);

		Self {
			total_characters: corpus_text.chars().count(),
			total_words: tokens.len(),
			unique_trigrams: model.len(),
			unique_start_words,
			most_common_starts: ranked,
		}
	}

	pub fn from_corpus(corpus: &Corpus, model: &WordModel, top_n: usize) -> Self {
		Self::compute(corpus.text(), corpus.tokens(), model, top_n)
	}
}
