//! Character-level Markov text generation library.
//!
//! This crate provides a fixed-order character model including:
//! - Per-window frequency lists of the characters that follow a context
//! - Training from an in-memory corpus (or a file, as a convenience)
//! - Weighted random sampling with an optional fixed seed
//! - Text generation from a seed text
//!
//! The model types, their configuration and the error type are public
//! and re-exported at the crate root. Corpus file handling stays internal
//! and is reached through `LanguageModel::train_from_file`.

/// Core Markov model, frequency lists and generation logic.
pub mod model;

/// Crate error type and `Result` alias.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
pub use model::config::ModelConfig;
pub use model::frequency_list::{CharCount, FrequencyList};
pub use model::language_model::LanguageModel;
