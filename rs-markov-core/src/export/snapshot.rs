use crate::error::Result;
use crate::model::word_model::WordModel;

/// Encodes the model with `postcard` for compact storage and fast reloading.
pub fn to_bytes(model: &WordModel) -> Result<Vec<u8>> {
	Ok(postcard::to_stdvec(model)?)
}

pub fn from_bytes(bytes: &[u8]) -> Result<WordModel> {
	Ok(postcard::from_bytes(bytes)?)
}
