use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use rs_markov_core::export::load_model;
use rs_markov_core::model::sampler::DEFAULT_LENGTH;
use rs_markov_core::pipeline::{self, PipelineOutcome};
use rs_markov_core::{ExportConfig, MarkovError, Sampler, StartWord};

#[derive(Parser)]
#[command(name = "rs-markov", version, about = "Word trigram Markov model exporter and text generator")]
struct Cli {
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
	/// Build the model from a text file and export it (default)
	Export(ExportArgs),

	/// Generate a text from an exported model
	Generate {
		#[arg(short, long, default_value = "markov_model.json", help = "Model file (.json or .bin)")]
		model: PathBuf,

		#[arg(short, long, help = "Start word (random context if omitted)")]
		start: Option<String>,

		#[arg(short, long, default_value_t = DEFAULT_LENGTH, help = "Maximum number of words")]
		length: usize,

		#[arg(long, help = "Seed for reproducible output")]
		seed: Option<u64>,
	},

	/// List the available start words of an exported model
	Starts {
		#[arg(short, long, default_value = "markov_model.json", help = "Model file (.json or .bin)")]
		model: PathBuf,
	},
}

#[derive(Args, Default)]
struct ExportArgs {
	#[arg(short, long, help = "Input text file")]
	input: Option<PathBuf>,

	#[arg(short, long, help = "Output directory")]
	out_dir: Option<PathBuf>,

	#[arg(short, long, help = "TOML configuration file")]
	config: Option<PathBuf>,

	#[arg(short, long, help = "Number of ranked start words kept in the statistics")]
	top: Option<usize>,

	#[arg(long, help = "Also write a binary snapshot with this file name")]
	snapshot: Option<String>,
}

impl ExportArgs {
	/// Loads the configuration file, if any, then applies command line overrides.
	fn into_config(self) -> Result<ExportConfig> {
		let mut config = match &self.config {
			Some(path) => ExportConfig::load(path)
				.with_context(|| format!("Failed to load config {}", path.display()))?,
			None => ExportConfig::default(),
		};

		if let Some(input) = self.input {
			config.input = input;
		}
		if let Some(out_dir) = self.out_dir {
			config.output_dir = out_dir;
		}
		if let Some(top) = self.top {
			config.top_starts = top;
		}
		if let Some(snapshot) = self.snapshot {
			config.snapshot_file = Some(snapshot);
		}
		Ok(config)
	}
}

fn main() -> Result<ExitCode> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();

	let result = match cli.command.unwrap_or_else(|| Command::Export(ExportArgs::default())) {
		Command::Export(args) => export(args),
		Command::Generate { model, start, length, seed } => generate(model, start, length, seed),
		Command::Starts { model } => starts(model),
	};

	match result {
		// Reader went away (`rs-markov starts | head`)
		Err(e) if is_broken_pipe(&e) => Ok(ExitCode::SUCCESS),
		other => other,
	}
}

fn is_broken_pipe(error: &anyhow::Error) -> bool {
	error
		.chain()
		.any(|cause| cause.downcast_ref::<io::Error>().is_some_and(|e| e.kind() == ErrorKind::BrokenPipe))
}

fn export(args: ExportArgs) -> Result<ExitCode> {
	let config = args.into_config()?;

	match pipeline::run(&config) {
		Ok(outcome) => {
			write_summary(&mut io::stdout().lock(), &config, &outcome)?;
			Ok(ExitCode::SUCCESS)
		}
		Err(MarkovError::InputNotFound { path }) => {
			log::error!("Input file '{}' not found, nothing exported", path.display());
			Ok(ExitCode::FAILURE)
		}
		Err(e) => Err(e.into()),
	}
}

fn write_summary<W: Write>(out: &mut W, config: &ExportConfig, outcome: &PipelineOutcome) -> io::Result<()> {
	let stats = &outcome.stats;

	writeln!(out, "\nMost common start words:")?;
	for (word, volume) in stats.most_common_starts.iter().take(config.summary_starts) {
		writeln!(out, "  - {word}: {volume} continuations")?;
	}

	writeln!(out, "\nSummary:")?;
	writeln!(out, "  - Source text: {} characters", stats.total_characters)?;
	writeln!(out, "  - Total words: {}", stats.total_words)?;
	writeln!(out, "  - Unique trigrams: {}", stats.unique_trigrams)?;
	writeln!(out, "  - Start words: {}", stats.unique_start_words)?;

	writeln!(out, "\nGenerated files:")?;
	for path in outcome.report.paths() {
		writeln!(out, "  - {}", path.display())?;
	}
	out.flush()
}

fn generate(model_path: PathBuf, start: Option<String>, length: usize, seed: Option<u64>) -> Result<ExitCode> {
	let model = load_model(&model_path).with_context(|| format!("Failed to load model {}", model_path.display()))?;
	let sampler = Sampler::new(&model);

	let start = start.map_or(StartWord::Random, StartWord::Custom);
	let mut rng: Box<dyn RngCore> = match seed {
		Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
		None => Box::new(rand::rng()),
	};

	match sampler.generate_with(&start, length, rng.as_mut()) {
		Ok(text) => {
			let mut out = io::stdout().lock();
			writeln!(out, "{text}")?;
			out.flush()?;
			Ok(ExitCode::SUCCESS)
		}
		Err(e @ (MarkovError::StartWordNotFound(_) | MarkovError::EmptyModel)) => {
			log::error!("{e}");
			Ok(ExitCode::FAILURE)
		}
		Err(e) => Err(e.into()),
	}
}

fn starts(model_path: PathBuf) -> Result<ExitCode> {
	let model = load_model(&model_path).with_context(|| format!("Failed to load model {}", model_path.display()))?;
	write_lines(&mut io::stdout().lock(), Sampler::new(&model).list_start_words())?;
	Ok(ExitCode::SUCCESS)
}

fn write_lines<W: Write, I: IntoIterator<Item = T>, T: std::fmt::Display>(out: &mut W, lines: I) -> io::Result<()> {
	for line in lines {
		writeln!(out, "{line}")?;
	}
	out.flush()
}
