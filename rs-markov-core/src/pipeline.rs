use crate::config::ExportConfig;
use crate::error::Result;
use crate::export::{ExportReport, Exporter};
use crate::io::read_file;
use crate::model::stats::ModelStats;
use crate::model::tokenizer::Corpus;
use crate::model::word_model::WordModel;

/// Result of a full export run.
#[derive(Clone, Debug)]
pub struct PipelineOutcome {
	pub stats: ModelStats,
	pub report: ExportReport,
}

/// Reads the corpus, builds the model and writes every artifact.
///
/// The input is read in full before anything is written, so a missing
/// input (`MarkovError::InputNotFound`) leaves the output directory untouched.
pub fn run(config: &ExportConfig) -> Result<PipelineOutcome> {
	log::info!("Loading {}", config.input.display());
	let raw = read_file(&config.input)?;

	let corpus = Corpus::new(&raw);
	log::info!("Loaded {} characters", corpus.total_characters());
	log::info!("Extracted {} words", corpus.len());

	let model = WordModel::from_corpus(&corpus);
	log::info!("Built model: {} unique contexts", model.len());

	let stats = ModelStats::from_corpus(&corpus, &model, config.top_starts);
	let report = Exporter::new(config).export(&model, &stats)?;

	Ok(PipelineOutcome { stats, report })
}
