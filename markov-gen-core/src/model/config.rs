use crate::error::{Error, Result};

/// Construction parameters for a `LanguageModel`.
///
/// # Invariants
/// - `window_length` is always >= 1
/// - A `seed` of `Some(_)` makes generation reproducible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Number of preceding characters used as context.
	window_length: usize,

	/// Optional fixed seed for the random generator.
	seed: Option<u64>,
}

impl ModelConfig {
	/// Creates a configuration with the given window length and no fixed seed.
	///
	/// # Errors
	/// Returns `Error::InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(Error::InvalidWindowLength);
		}
		Ok(Self { window_length, seed: None })
	}

	/// Fixes the random generator seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Returns the window length.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Returns the fixed seed, if any.
	pub fn seed(&self) -> Option<u64> {
		self.seed
	}
}
