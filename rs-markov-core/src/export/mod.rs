//! Persisted forms of a built model.
//!
//! - `structured`: JSON object `"w1|w2" -> [continuations]`
//! - `executable`: self-contained JavaScript module embedding the model
//!   with its sampling functions
//! - `snapshot`: compact `postcard` binary copy of the model

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::io::{self, has_extension};
use crate::model::stats::ModelStats;
use crate::model::word_model::WordModel;

pub mod executable;
pub mod snapshot;
pub mod structured;

/// Paths of the artifacts written by one export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
	pub model_path: PathBuf,
	pub script_path: PathBuf,
	pub stats_path: PathBuf,
	pub snapshot_path: Option<PathBuf>,
}

impl ExportReport {
	/// Written paths, in write order.
	pub fn paths(&self) -> Vec<&Path> {
		let mut paths = vec![self.model_path.as_path(), self.script_path.as_path(), self.stats_path.as_path()];
		if let Some(snapshot) = &self.snapshot_path {
			paths.push(snapshot.as_path());
		}
		paths
	}
}

/// Writes a model and its statistics to the files named by an `ExportConfig`.
#[derive(Clone, Debug)]
pub struct Exporter<'c> {
	config: &'c ExportConfig,
}

impl<'c> Exporter<'c> {
	pub fn new(config: &'c ExportConfig) -> Self {
		Self { config }
	}

	/// Writes the structured form, the executable form, the statistics and,
	/// when configured, the binary snapshot, in that order.
	///
	/// Creates the output directory if needed.
	///
	/// # Errors
	/// Any failed write aborts the export. Files already written are left in place.
	pub fn export(&self, model: &WordModel, stats: &ModelStats) -> Result<ExportReport> {
		let output_dir = self.config.output_dir();
		io::create_dir_all(&output_dir)?;

		let model_path = self.config.model_path();
		io::write_file(&model_path, structured::to_json(model)?)?;
		log::info!("Saved structured model: {}", model_path.display());

		let script_path = self.config.script_path();
		io::write_file(&script_path, executable::render(model, &self.config.constant_name)?)?;
		log::info!("Saved executable model: {}", script_path.display());

		let stats_path = self.config.stats_path();
		io::write_file(&stats_path, serde_json::to_string_pretty(stats)?)?;
		log::info!("Saved statistics: {}", stats_path.display());

		let snapshot_path = match self.config.snapshot_path() {
			Some(path) => {
				io::write_file(&path, snapshot::to_bytes(model)?)?;
				log::info!("Saved binary snapshot: {}", path.display());
				Some(path)
			}
			None => None,
		};

		Ok(ExportReport { model_path, script_path, stats_path, snapshot_path })
	}
}

/// Loads a model from its structured JSON form, or from a binary snapshot
/// when the file has a `.bin` extension.
///
/// # Errors
/// A missing file is reported as `MarkovError::InputNotFound`.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<WordModel> {
	let path = path.as_ref();
	let model = if has_extension(path, "bin") {
		snapshot::from_bytes(&io::read_bytes(path)?)?
	} else {
		structured::from_json(&io::read_file(path)?)?
	};
	log::debug!("Loaded {} contexts from {}", model.len(), path.display());
	Ok(model)
}
