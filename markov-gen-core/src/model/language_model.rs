use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::ModelConfig;
use super::frequency_list::FrequencyList;
use crate::error::{Error, Result};
use crate::io::read_corpus;

/// Fixed-order character-level Markov model.
///
/// Maps every window of `window_length` characters seen during training
/// to the list of characters that followed it, and generates text by
/// repeatedly sampling from the list of the trailing window.
///
/// # Responsibilities
/// - Build the window table from a corpus (clearing any previous training)
/// - Turn raw counts into cumulative distributions
/// - Sample the next character with the model's own random generator
/// - Extend a seed text until a target length or an unknown window
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key in `table` is exactly `window_length` characters long
/// - Every list in `table` holds at least one observation
///
/// A model is not meant to be shared between threads while training;
/// callers needing concurrent access must serialize it themselves.
#[derive(Debug)]
pub struct LanguageModel {
	/// Number of characters in a context window.
	window_length: usize,

	/// Mapping from a window to the characters observed right after it.
	table: HashMap<String, FrequencyList>,

	rng: StdRng,
}

impl LanguageModel {
	/// Creates a model whose random generator is seeded from the OS.
	///
	/// # Errors
	/// Returns `Error::InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Ok(Self::from_config(&ModelConfig::new(window_length)?))
	}

	/// Creates a reproducible model: the same seed, training text and
	/// generation calls always produce the same output.
	///
	/// # Errors
	/// Returns `Error::InvalidWindowLength` if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Ok(Self::from_config(&ModelConfig::new(window_length)?.with_seed(seed)))
	}

	/// Creates a model from an already validated configuration.
	pub fn from_config(config: &ModelConfig) -> Self {
		let rng = match config.seed() {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self { window_length: config.window_length(), table: HashMap::new(), rng }
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows learned by the last training.
	pub fn window_count(&self) -> usize {
		self.table.len()
	}

	/// Returns the frequency list of `window`, if it was seen during training.
	pub fn frequencies(&self, window: &str) -> Option<&FrequencyList> {
		self.table.get(window)
	}

	/// Trains the model on `text`, discarding any previous training.
	///
	/// Every offset is visited left to right: the window starting at `i`
	/// records the character right after it. As new characters are inserted
	/// at the front of a list, the most recently first-seen character of a
	/// window ends up frontmost.
	///
	/// # Notes
	/// - Lengths are counted in characters, not bytes.
	/// - A text not longer than the window leaves the model empty.
	pub fn train(&mut self, text: &str) {
		self.table.clear();

		let chars: Vec<char> = text.chars().collect();
		if chars.len() <= self.window_length {
			debug!(
				"corpus of {} chars too short for window length {}, model left empty",
				chars.len(),
				self.window_length
			);
			return;
		}

		for i in 0..chars.len() - self.window_length {
			let window: String = chars[i..i + self.window_length].iter().collect();
			let next_char = chars[i + self.window_length];
			self.table.entry(window).or_default().update(next_char);
		}

		for list in self.table.values_mut() {
			list.calculate_probabilities();
		}

		info!(
			"trained on {} chars: {} windows of length {}",
			chars.len(),
			self.table.len(),
			self.window_length
		);
	}

	/// Reads the corpus at `filepath` and trains on it.
	///
	/// # Errors
	/// Returns `Error::Io` if the file cannot be read. The previous training
	/// is kept in that case.
	pub fn train_from_file<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let text = read_corpus(filepath)?;
		self.train(&text);
		Ok(())
	}

	/// Recomputes the probabilities of `list` from its counts.
	///
	/// No-op on an empty list. The last entry's cumulative probability is
	/// always exactly 1.0 afterwards.
	pub fn calculate_probabilities(list: &mut FrequencyList) {
		list.calculate_probabilities();
	}

	/// Draws a character from `list` using the model's random generator.
	///
	/// `list` must have an up-to-date distribution
	/// (see [`LanguageModel::calculate_probabilities`]).
	///
	/// # Errors
	/// Returns `Error::EmptyDistribution` if `list` is empty.
	pub fn get_random_char(&mut self, list: &FrequencyList) -> Result<char> {
		sample(&mut self.rng, list)
	}

	/// Extends `initial_text` by up to `text_length` generated characters.
	///
	/// # Behavior
	/// - A seed shorter than the window is returned unchanged.
	/// - Each step looks up the trailing window, refreshes its distribution,
	///   samples one character and appends it.
	/// - Generation stops early, without error, on a window never seen
	///   during training.
	pub fn generate(&mut self, initial_text: &str, text_length: usize) -> Result<String> {
		let mut out: Vec<char> = initial_text.chars().collect();
		if out.len() < self.window_length {
			debug!("seed {:?} shorter than window length {}", initial_text, self.window_length);
			return Ok(initial_text.to_owned());
		}

		let target = out.len().saturating_add(text_length);
		while out.len() < target {
			let window: String = out[out.len() - self.window_length..].iter().collect();
			let list = match self.table.get_mut(&window) {
				Some(list) if !list.is_empty() => list,
				_ => {
					debug!("unknown window {:?}, stopping after {} chars", window, out.len());
					break;
				}
			};
			list.calculate_probabilities();
			out.push(sample(&mut self.rng, list)?);
		}

		Ok(out.into_iter().collect())
	}
}

/// Draws `r` uniformly in `[0, 1)` and picks the matching entry.
fn sample<R: Rng>(rng: &mut R, list: &FrequencyList) -> Result<char> {
	if list.is_empty() {
		return Err(Error::EmptyDistribution);
	}
	pick(list, rng.random::<f64>())
}

/// Returns the first entry, in list order, whose cumulative probability is
/// `>= r`. A draw equal to a boundary resolves to the entry ending there.
fn pick(list: &FrequencyList, r: f64) -> Result<char> {
	let mut fallback = None;
	for entry in list.iter() {
		if entry.cumulative_probability() >= r {
			return Ok(entry.character());
		}
		fallback = Some(entry.character());
	}

	// Unreachable while the last cumulative probability is pinned to 1.0
	fallback.ok_or(Error::EmptyDistribution)
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut windows: Vec<&String> = self.table.keys().collect();
		windows.sort();
		for window in windows {
			writeln!(f, "{:?} {}", window, self.table[window])?;
		}
		Ok(())
	}
}
