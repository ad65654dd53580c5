use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::executable::DEFAULT_CONSTANT_NAME;
use crate::io;
use crate::model::stats::DEFAULT_TOP_STARTS;

/// Settings of the export pipeline.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
	#[serde(default = "default_input")]
	pub input: PathBuf,
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	#[serde(default = "default_model_file")]
	pub model_file: String,
	#[serde(default = "default_script_file")]
	pub script_file: String,
	#[serde(default = "default_stats_file")]
	pub stats_file: String,
	/// Binary snapshot is only written when set.
	#[serde(default)]
	pub snapshot_file: Option<String>,
	#[serde(default = "default_constant_name")]
	pub constant_name: String,
	#[serde(default = "default_top_starts")]
	pub top_starts: usize,
	#[serde(default = "default_summary_starts")]
	pub summary_starts: usize,
}

fn default_input() -> PathBuf {
	PathBuf::from("acile.txt")
}
fn default_output_dir() -> PathBuf {
	PathBuf::from(".")
}
fn default_model_file() -> String {
	"markov_model.json".to_string()
}
fn default_script_file() -> String {
	"markov_model.js".to_string()
}
fn default_stats_file() -> String {
	"model_stats.json".to_string()
}
fn default_constant_name() -> String {
	DEFAULT_CONSTANT_NAME.to_string()
}
fn default_top_starts() -> usize {
	DEFAULT_TOP_STARTS
}
fn default_summary_starts() -> usize {
	10
}

impl Default for ExportConfig {
	fn default() -> Self {
		Self {
			input: default_input(),
			output_dir: default_output_dir(),
			model_file: default_model_file(),
			script_file: default_script_file(),
			stats_file: default_stats_file(),
			snapshot_file: None,
			constant_name: default_constant_name(),
			top_starts: default_top_starts(),
			summary_starts: default_summary_starts(),
		}
	}
}

impl ExportConfig {
	/// Loads a TOML configuration file.
	///
	/// A missing file is reported as `MarkovError::InputNotFound`.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let content = io::read_file(path)?;
		Self::from_toml(&content)
	}

	pub fn from_toml(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Directory receiving the artifacts, with `"."` resolved to the working directory.
	pub fn output_dir(&self) -> PathBuf {
		io::normalize_folder(&self.output_dir)
	}

	pub fn model_path(&self) -> PathBuf {
		self.output_dir().join(&self.model_file)
	}

	pub fn script_path(&self) -> PathBuf {
		self.output_dir().join(&self.script_file)
	}

	pub fn stats_path(&self) -> PathBuf {
		self.output_dir().join(&self.stats_file)
	}

	pub fn snapshot_path(&self) -> Option<PathBuf> {
		self.snapshot_file.as_ref().map(|name| self.output_dir().join(name))
	}
}
