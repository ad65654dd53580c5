use crate::error::Result;
use crate::model::word_model::WordModel;

/// Renders the model as a pretty-printed JSON object.
///
/// Keys are `w1|w2` in model order, values the continuation arrays.
/// Non-ASCII tokens are written verbatim.
pub fn to_json(model: &WordModel) -> Result<String> {
	Ok(serde_json::to_string_pretty(model)?)
}

/// Parses a model previously written by `to_json`.
pub fn from_json(json: &str) -> Result<WordModel> {
	Ok(serde_json::from_str(json)?)
}
