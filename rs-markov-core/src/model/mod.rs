//! Word-level order-2 Markov model.
//!
//! - Tokenization of the lowercased corpus (`Corpus`)
//! - Two-word lookup keys (`Context`)
//! - The context to continuations mapping (`WordModel`)
//! - Derived statistics (`ModelStats`)
//! - Random text generation (`Sampler`)

/// Two consecutive tokens and their `w1|w2` serialized key.
pub mod context;

/// Model builder and lookup API.
///
/// Single pass over the tokens; keeps duplicate continuations so their
/// frequency drives sampling.
pub mod word_model;

/// Count and ranking summary of a built model.
pub mod stats;

/// Weighted random generation from a model, seeded by a start word.
pub mod sampler;

/// Lowercasing, Unicode-aware word tokenizer.
pub mod tokenizer;
