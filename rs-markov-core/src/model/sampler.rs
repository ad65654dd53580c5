use rand::Rng;
use rand::seq::IndexedRandom;

use super::context::Context;
use super::word_model::WordModel;
use crate::error::{MarkovError, Result};

/// Default number of tokens produced by `Sampler::generate`.
pub const DEFAULT_LENGTH: usize = 50;

/// Strategy used to select the starting context of a generation.
///
/// # Variants
/// - `Custom(String)`: start from a random context whose first token is the
///   given word (lowercased and trimmed first).
/// - `Random`: start from any context of the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartWord {
	Custom(String),
	Random,
}

/// Random text generation over a `WordModel`.
///
/// Every step picks uniformly among the recorded continuations of the
/// current context, so duplicated continuations are proportionally likelier.
#[derive(Clone, Copy, Debug)]
pub struct Sampler<'a> {
	model: &'a WordModel,
}

impl<'a> Sampler<'a> {
	pub fn new(model: &'a WordModel) -> Self {
		Self { model }
	}

	/// Contexts whose first token is `start_word`, after normalization.
	///
	/// Linear scan over every context, in model order.
	pub fn candidates(&self, start_word: &str) -> Vec<&'a Context> {
		let word = normalize(start_word);
		self.model.contexts().filter(|context| context.first() == word).collect()
	}

	/// Generates up to `length` space-separated tokens starting with `start_word`.
	///
	/// Uses the thread-local RNG. See `generate_with`.
	pub fn generate(&self, start_word: &str, length: usize) -> Result<String> {
		self.generate_with(&StartWord::Custom(start_word.to_owned()), length, &mut rand::rng())
	}

	/// Generates a text with an explicit start strategy and RNG.
	///
	/// `length` counts every output token, the two seed tokens included.
	/// Generation stops early when the current context has no continuation;
	/// the output never has fewer than the two seed tokens.
	///
	/// # Errors
	/// - `StartWordNotFound` if no context begins with the custom start word.
	/// - `EmptyModel` if a random start is requested on an empty model.
	pub fn generate_with<R: Rng + ?Sized>(&self, start: &StartWord, length: usize, rng: &mut R) -> Result<String> {
		let seed = self.pick_seed(start, rng)?;

		let mut output: Vec<&'a str> = vec![seed.first(), seed.second()];
		let mut window = seed.clone();
		for _ in 2..length {
			let next = match self.model.get(&window).and_then(|next| next.choose(&mut *rng)) {
				Some(next) => next,
				None => break,
			};
			output.push(next);
			window = window.advance(next);
		}

		Ok(output.join(" "))
	}

	/// Distinct first tokens of all contexts, sorted alphabetically.
	///
	/// Ordered by UTF-16 code units, like `Array.prototype.sort` in the
	/// exported script.
	pub fn list_start_words(&self) -> Vec<&'a str> {
		let mut words: Vec<&'a str> = self.model.start_words().into_iter().collect();
		words.sort_unstable_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
		words
	}

	fn pick_seed<R: Rng + ?Sized>(&self, start: &StartWord, rng: &mut R) -> Result<&'a Context> {
		match start {
			StartWord::Custom(word) => self
				.candidates(word)
				.choose(rng)
				.copied()
				.ok_or_else(|| MarkovError::StartWordNotFound(normalize(word))),
			StartWord::Random => {
				if self.model.is_empty() {
					return Err(MarkovError::EmptyModel);
				}
				let index = rng.random_range(0..self.model.len());
				self.model.context_at(index).ok_or(MarkovError::EmptyModel)
			}
		}
	}
}

fn normalize(word: &str) -> String {
	word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	#[test]
	fn unknown_start_word_is_not_found() {
		let model = WordModel::build("the cat sat on the mat");
		let err = Sampler::new(&model).generate("zzz", DEFAULT_LENGTH).unwrap_err();
		assert!(matches!(err, MarkovError::StartWordNotFound(w) if w == "zzz"));
	}

	#[test]
	fn start_word_is_trimmed_and_lowercased() {
		let model = WordModel::build("one two three four");
		let text = Sampler::new(&model).generate("  ONE ", DEFAULT_LENGTH).unwrap();
		assert_eq!(text, "one two three four");
	}

	#[test]
	fn stops_early_without_continuation() {
		// Single path: every context has exactly one continuation
		let model = WordModel::build("a b c d e");
		let text = Sampler::new(&model).generate("b", 50).unwrap();
		assert_eq!(text, "b c d e");
	}

	#[test]
	fn respects_length() {
		let model = WordModel::build("la la la la la la la la");
		let sampler = Sampler::new(&model);
		let text = sampler.generate("la", 5).unwrap();
		assert_eq!(text.split(' ').count(), 5);
		assert_eq!(sampler.generate("la", 2).unwrap(), "la la");
		// The seed pair is always emitted
		assert_eq!(sampler.generate("la", 0).unwrap(), "la la");
	}

	#[test]
	fn output_follows_model_transitions() {
		let model = WordModel::build("o gato comeu o rato e o rato comeu o queijo e o gato dormiu");
		let sampler = Sampler::new(&model);
		let mut rng = rng();
		for _ in 0..50 {
			let text = sampler.generate_with(&StartWord::Custom("o".into()), 20, &mut rng).unwrap();
			let tokens: Vec<&str> = text.split(' ').collect();
			assert!(tokens.len() >= 2 && tokens.len() <= 20);
			assert_eq!(tokens[0], "o");
			assert!(model.continuations(tokens[0], tokens[1]).is_some());
			for w in tokens.windows(3) {
				let next = model.continuations(w[0], w[1]).unwrap();
				assert!(next.iter().any(|n| n == w[2]));
			}
		}
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let model = WordModel::build("a b c a b d a b e b a b c b a");
		let sampler = Sampler::new(&model);
		let start = StartWord::Custom("a".into());
		let first = sampler.generate_with(&start, 30, &mut rng()).unwrap();
		let second = sampler.generate_with(&start, 30, &mut rng()).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn duplicate_continuations_weight_the_choice() {
		let model = WordModel::from_entries(vec![(
			Context::new("x", "y"),
			vec!["a".into(), "a".into(), "a".into(), "b".into()],
		)]);
		let sampler = Sampler::new(&model);
		let mut rng = rng();
		let picks_a = (0..4000)
			.filter(|_| sampler.generate_with(&StartWord::Random, 3, &mut rng).unwrap() == "x y a")
			.count();
		// Expected 3000
		assert!((2700..3300).contains(&picks_a), "{picks_a}");
	}

	#[test]
	fn random_start_on_empty_model() {
		let model = WordModel::default();
		let err = Sampler::new(&model).generate_with(&StartWord::Random, 10, &mut rng()).unwrap_err();
		assert!(matches!(err, MarkovError::EmptyModel));
	}

	#[test]
	fn empty_continuation_list_terminates() {
		let model = WordModel::from_entries(vec![(Context::new("x", "y"), Vec::new())]);
		assert_eq!(Sampler::new(&model).generate("x", 10).unwrap(), "x y");
	}

	#[test]
	fn start_words_sorted_and_unique() {
		let model = WordModel::build("the cat sat on the mat the cat ran");
		assert_eq!(Sampler::new(&model).list_start_words(), ["cat", "mat", "on", "sat", "the"]);
		assert!(Sampler::new(&WordModel::default()).list_start_words().is_empty());
	}

	#[test]
	fn start_words_use_utf16_order() {
		// U+1D49C is a surrogate pair (0xD835 ..), which sorts before U+FF5A
		let model = WordModel::from_entries(vec![
			(Context::new("\u{ff5a}", "a"), vec!["b".into()]),
			(Context::new("\u{1d49c}", "a"), vec!["b".into()]),
			(Context::new("c", "a"), vec!["b".into()]),
		]);
		assert_eq!(Sampler::new(&model).list_start_words(), ["c", "\u{1d49c}", "\u{ff5a}"]);
	}

	#[test]
	fn candidates_scan_every_context() {
		let model = WordModel::build("the cat sat on the mat the cat ran");
		let candidates: Vec<String> = Sampler::new(&model).candidates("The").iter().map(|c| c.to_key()).collect();
		assert_eq!(candidates, ["the|cat", "the|mat"]);
	}
}
