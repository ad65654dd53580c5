//! Word trigram (order-2 Markov chain) text model library.
//!
//! This crate provides:
//! - Corpus tokenization and single-pass model building
//! - Model statistics (counts and most common start words)
//! - Export to JSON, to a self-contained JavaScript module and to a binary snapshot
//! - Random text generation from a built or reloaded model
//!
//! `pipeline::run` chains all of it for one input file.

/// Error type shared by every operation.
pub mod error;

/// Export pipeline settings, loadable from TOML.
pub mod config;

/// Core model types: tokenizer, contexts, builder, statistics and sampler.
pub mod model;

/// Writers (and readers) for the persisted model forms.
pub mod export;

/// Read, build, export in one call.
pub mod pipeline;

/// I/O utilities (file loading and writing, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use config::ExportConfig;
pub use error::{MarkovError, Result};
pub use model::context::Context;
pub use model::sampler::{Sampler, StartWord};
pub use model::stats::ModelStats;
pub use model::tokenizer::Corpus;
pub use model::word_model::WordModel;
