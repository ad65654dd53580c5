use indexmap::IndexMap;
use indexmap::IndexSet;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::context::Context;
use super::tokenizer::Corpus;
use crate::error::Result;

/// Order-2 word Markov model.
///
/// Maps every context (two consecutive tokens) to the ordered list of
/// tokens observed right after it in the corpus.
///
/// # Responsibilities
/// - Build the model from raw text or tokens in a single pass
/// - Answer continuation lookups for a context
/// - Serialize as `"w1|w2" -> [continuations]`
///
/// # Invariants
/// - Contexts keep the order of their first appearance in the corpus
/// - Continuation lists keep corpus order and duplicates: the number of
///   copies of a token is its transition frequency
/// - A model built from a corpus never holds an empty continuation list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordModel {
	transitions: IndexMap<Context, Vec<String>>,
}

impl WordModel {
	/// Tokenizes `corpus_text` and builds the model from its tokens.
	///
	/// A text with fewer than 3 tokens yields an empty model.
	pub fn build(corpus_text: &str) -> Self {
		Self::from_corpus(&Corpus::new(corpus_text))
	}

	pub fn from_corpus(corpus: &Corpus) -> Self {
		Self::from_tokens(corpus.tokens())
	}

	/// Builds the model from an already tokenized corpus.
	///
	/// For every window `(a, b, c)` of three consecutive tokens, `c` is appended
	/// to the continuations of `(a, b)`.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut transitions: IndexMap<Context, Vec<String>> = IndexMap::new();
		for window in tokens.windows(3) {
			let context = Context::new(window[0].as_ref(), window[1].as_ref());
			transitions.entry(context).or_default().push(window[2].as_ref().to_owned());
		}
		Self { transitions }
	}

	/// Rebuilds a model from `(context, continuations)` pairs, keeping their order.
	///
	/// Repeated contexts have their continuations concatenated.
	pub fn from_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (Context, Vec<String>)>,
	{
		let mut transitions: IndexMap<Context, Vec<String>> = IndexMap::new();
		for (context, next) in entries {
			transitions.entry(context).or_default().extend(next);
		}
		Self { transitions }
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	pub fn get(&self, context: &Context) -> Option<&[String]> {
		self.transitions.get(context).map(Vec::as_slice)
	}

	/// Continuations of `(first, second)`, if that context exists.
	pub fn continuations(&self, first: &str, second: &str) -> Option<&[String]> {
		self.get(&Context::new(first, second))
	}

	/// Iterates contexts and their continuations in first-appearance order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Context, &[String])> {
		self.transitions.iter().map(|(context, next)| (context, next.as_slice()))
	}

	pub fn contexts(&self) -> impl ExactSizeIterator<Item = &Context> {
		self.transitions.keys()
	}

	/// Context at a given position in first-appearance order.
	pub fn context_at(&self, index: usize) -> Option<&Context> {
		self.transitions.get_index(index).map(|(context, _)| context)
	}

	/// Sum of all continuation list lengths.
	pub fn total_continuations(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Distinct first tokens of all contexts, in first-seen order.
	pub fn start_words(&self) -> IndexSet<&str> {
		self.transitions.keys().map(Context::first).collect()
	}
}

impl Serialize for WordModel {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_map(self.transitions.iter().map(|(context, next)| (context.to_key(), next)))
	}
}

impl<'de> Deserialize<'de> for WordModel {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = IndexMap::<String, Vec<String>>::deserialize(deserializer)?;
		let entries = raw
			.into_iter()
			.map(|(key, next)| Context::from_key(&key).map(|context| (context, next)))
			.collect::<Result<Vec<_>>>()
			.map_err(D::Error::custom)?;
		Ok(Self::from_entries(entries))
	}
}
