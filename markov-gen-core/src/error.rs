//! Error types for the character-level Markov generator.

use thiserror::Error;

/// Failures reported by the model and its collaborators.
///
/// Missing data (a corpus shorter than the window, a window never seen
/// during training) is not an error: the model answers those with its
/// defined fallback outputs instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	#[error("index {index} out of range for list of size {size}")]
	IndexOutOfRange { index: usize, size: usize },

	#[error("list is empty")]
	EmptyList,

	#[error("probability list is empty")]
	EmptyDistribution,

	#[error("window length must be >= 1")]
	InvalidWindowLength,

	#[error("failed to {operation}: {source}")]
	Io {
		operation: String,
		#[source]
		source: std::io::Error,
	},
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
