use std::fs;
use std::path::Path;

use rs_markov_core::export::{load_model, structured};
use rs_markov_core::pipeline;
use rs_markov_core::{ExportConfig, MarkovError, ModelStats, Sampler, WordModel};

const CORPUS: &str = "No meio do caminho tinha uma pedra.\n\
Tinha uma pedra no meio do caminho,\n\
tinha uma pedra; no meio do caminho tinha uma pedra.";

fn config_for(dir: &Path) -> ExportConfig {
	let input = dir.join("acile.txt");
	fs::write(&input, CORPUS).unwrap();
	ExportConfig { input, output_dir: dir.join("out"), ..ExportConfig::default() }
}

#[test]
fn export_writes_three_artifacts() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_for(dir.path());

	let outcome = pipeline::run(&config).unwrap();

	assert!(config.model_path().exists());
	assert!(config.script_path().exists());
	assert!(config.stats_path().exists());
	assert_eq!(outcome.report.snapshot_path, None);
	assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 3);
}

#[test]
fn structured_form_reproduces_the_model() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_for(dir.path());
	pipeline::run(&config).unwrap();

	let json = fs::read_to_string(config.model_path()).unwrap();
	let restored = structured::from_json(&json).unwrap();
	assert_eq!(restored, WordModel::build(CORPUS));
	assert_eq!(
		restored.continuations("uma", "pedra").unwrap(),
		["tinha", "no", "no"]
	);
}

#[test]
fn statistics_file_is_consistent_with_the_model() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_for(dir.path());
	let outcome = pipeline::run(&config).unwrap();

	let written: ModelStats = serde_json::from_str(&fs::read_to_string(config.stats_path()).unwrap()).unwrap();
	assert_eq!(written, outcome.stats);

	let model = WordModel::build(CORPUS);
	assert_eq!(written.unique_trigrams, model.len());
	assert_eq!(written.total_words, 24);
	assert_eq!(written.total_characters, CORPUS.to_lowercase().chars().count());
	assert_eq!(written.unique_start_words, model.start_words().len());
	assert!(written.most_common_starts.len() <= 20);

	let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(config.stats_path()).unwrap()).unwrap();
	let fields: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
	for field in ["total_characters", "total_words", "unique_trigrams", "unique_start_words", "most_common_starts"] {
		assert!(fields.contains(&field), "{field}");
	}
}

#[test]
fn script_is_self_contained() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_for(dir.path());
	pipeline::run(&config).unwrap();

	let script = fs::read_to_string(config.script_path()).unwrap();
	let json = fs::read_to_string(config.model_path()).unwrap();
	assert!(script.contains(&format!("const MARKOV_MODEL = {json};")));
	assert!(script.contains("function generateMarkovText("));
	assert!(script.contains("function getAvailableStartWords("));
	assert!(!script.contains(&config.model_file));
}

#[test]
fn missing_input_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let config = ExportConfig {
		input: dir.path().join("missing.txt"),
		output_dir: dir.path().join("out"),
		..ExportConfig::default()
	};

	let err = pipeline::run(&config).unwrap_err();

	assert!(matches!(err, MarkovError::InputNotFound { ref path } if path.ends_with("missing.txt")));
	assert!(!dir.path().join("out").exists());
}

#[test]
fn short_input_exports_an_empty_model() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("tiny.txt");
	fs::write(&input, "Duas palavras.").unwrap();
	let config = ExportConfig { input, output_dir: dir.path().to_path_buf(), ..ExportConfig::default() };

	let outcome = pipeline::run(&config).unwrap();

	assert_eq!(outcome.stats.total_words, 2);
	assert_eq!(outcome.stats.unique_trigrams, 0);
	assert_eq!(fs::read_to_string(config.model_path()).unwrap(), "{}");
}

#[test]
fn snapshot_round_trip_through_the_pipeline() {
	let dir = tempfile::tempdir().unwrap();
	let config = ExportConfig { snapshot_file: Some("markov_model.bin".into()), ..config_for(dir.path()) };
	let outcome = pipeline::run(&config).unwrap();

	let from_json = load_model(config.model_path()).unwrap();
	let from_snapshot = load_model(outcome.report.snapshot_path.unwrap()).unwrap();
	assert_eq!(from_json, from_snapshot);
}

#[test]
fn exported_model_drives_the_sampler() {
	let dir = tempfile::tempdir().unwrap();
	let config = config_for(dir.path());
	pipeline::run(&config).unwrap();

	let model = load_model(config.model_path()).unwrap();
	let sampler = Sampler::new(&model);
	assert_eq!(sampler.list_start_words(), ["caminho", "do", "meio", "no", "pedra", "tinha", "uma"]);

	let text = sampler.generate("Tinha", 12).unwrap();
	let tokens: Vec<&str> = text.split(' ').collect();
	assert_eq!(&tokens[..2], ["tinha", "uma"]);
	assert!(tokens.len() <= 12);
	assert!(matches!(sampler.generate("pedras", 12), Err(MarkovError::StartWordNotFound(_))));
}
