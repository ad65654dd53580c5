use std::sync::LazyLock;

use regex::Regex;

/// Unicode-aware word class: letters, marks, digits and connector punctuation.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("static word pattern"));

/// Lowercases `text` and returns every maximal `\w+` run, in order.
///
/// Punctuation and whitespace only separate tokens, they are never tokens.
pub fn tokenize(text: &str) -> Vec<String> {
	scan(&text.to_lowercase())
}

fn scan(lowercased: &str) -> Vec<String> {
	WORD.find_iter(lowercased).map(|m| m.as_str().to_owned()).collect()
}

/// A tokenized, lowercased corpus.
///
/// Keeps the lowercased source text alongside its tokens so that
/// character and word counts never need a second pass over the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
	text: String,
	tokens: Vec<String>,
}

impl Corpus {
	/// Lowercases and tokenizes `raw_text`.
	pub fn new(raw_text: &str) -> Self {
		let text = raw_text.to_lowercase();
		let tokens = scan(&text);
		Self { text, tokens }
	}

	/// The lowercased source text.
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Number of characters (not bytes) of the lowercased text.
	pub fn total_characters(&self) -> usize {
		self.text.chars().count()
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}
