use std::fmt;

use crate::error::{MarkovError, Result};

/// Separator placed between the two tokens of a serialized context key.
///
/// Not a word character, so the tokenizer never produces it inside a token.
pub const KEY_SEPARATOR: char = '|';

/// Two consecutive corpus tokens used as a lookup key.
///
/// Conceptually, this is a state of an order-2 Markov chain over words.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	pub fn new<A: Into<String>, B: Into<String>>(first: A, second: B) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Context reached after emitting `next` from this one.
	pub fn advance(&self, next: &str) -> Self {
		Self::new(self.second.as_str(), next)
	}

	/// Serialized form: `first|second`.
	pub fn to_key(&self) -> String {
		format!("{}{}{}", self.first, KEY_SEPARATOR, self.second)
	}

	/// Parses a serialized key, splitting on the first separator.
	///
	/// # Errors
	/// Returns `MarkovError::InvalidKey` if the key has no separator.
	pub fn from_key(key: &str) -> Result<Self> {
		key.split_once(KEY_SEPARATOR)
			.map(|(first, second)| Self::new(first, second))
			.ok_or_else(|| MarkovError::InvalidKey(key.to_owned()))
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.first, KEY_SEPARATOR, self.second)
	}
}
