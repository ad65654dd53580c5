use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building, exporting, loading or sampling a model.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The corpus file could not be located or opened.
	#[error("input file not found: {}", path.display())]
	InputNotFound { path: PathBuf },

	/// No context starts with the requested word.
	#[error("start word \"{0}\" not found in the model")]
	StartWordNotFound(String),

	/// Random seeding was asked on a model without any context.
	#[error("the model has no context to start from")]
	EmptyModel,

	/// A serialized context key has no separator.
	#[error("invalid context key \"{0}\"")]
	InvalidKey(String),

	/// The executable export needs a valid JavaScript identifier.
	#[error("invalid constant name \"{0}\"")]
	InvalidConstantName(String),

	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("snapshot error: {0}")]
	Snapshot(#[from] postcard::Error),

	#[error("config error: {0}")]
	Config(#[from] toml::de::Error),
}

impl MarkovError {
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

pub type Result<T> = std::result::Result<T, MarkovError>;
