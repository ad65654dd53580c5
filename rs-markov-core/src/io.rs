use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::error::{MarkovError, Result};

/// Reads a whole text file into memory.
///
/// - A missing file maps to `MarkovError::InputNotFound`
/// - Any other failure (permissions, invalid UTF-8) maps to `MarkovError::Io`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut file = File::open(path).map_err(|e| match e.kind() {
		ErrorKind::NotFound => MarkovError::InputNotFound { path: path.to_path_buf() },
		_ => MarkovError::io(path, e),
	})?;

	let mut contents = String::new();
	file.read_to_string(&mut contents).map_err(|e| MarkovError::io(path, e))?;
	Ok(contents)
}

/// Reads a whole binary file into memory, with the same error mapping as `read_file`.
pub(crate) fn read_bytes<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>> {
	let path = filename.as_ref();
	fs::read(path).map_err(|e| match e.kind() {
		ErrorKind::NotFound => MarkovError::InputNotFound { path: path.to_path_buf() },
		_ => MarkovError::io(path, e),
	})
}

/// Writes `contents` to `path` in one go, replacing any existing file.
pub(crate) fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
	let path = path.as_ref();
	fs::write(path, contents).map_err(|e| MarkovError::io(path, e))
}

/// Creates `path` and any missing parent directories.
pub(crate) fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
	let path = path.as_ref();
	fs::create_dir_all(path).map_err(|e| MarkovError::io(path, e))
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Returns `true` when the path ends with the given extension (case-insensitive).
///
/// Example: `data/model.BIN` has extension `"bin"`.
pub(crate) fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
	path.as_ref()
		.extension()
		.map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
		.unwrap_or(false)
}
