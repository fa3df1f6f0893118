use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// One observed next character and its statistics.
///
/// `probability` and `cumulative_probability` are derived from the counts
/// of the owning list. They are stale after any count change until the
/// list's distribution is recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct CharCount {
	character: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl CharCount {
	fn new(character: char) -> Self {
		Self { character, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times this character was observed (always >= 1).
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for CharCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.character, self.count, self.probability, self.cumulative_probability)
	}
}

/// Ordered list of the characters observed after one context window.
///
/// New characters are inserted at the **front** of the list; an already
/// known character keeps its position and only has its count increased.
/// This order has no probabilistic meaning but decides which entry wins
/// when a random draw falls exactly on a cumulative boundary.
///
/// # Invariants
/// - Characters are unique within a list
/// - Every count is strictly positive
///
/// Entries are stored back-to-front so that a front insertion is a push,
/// and `positions` maps each character to its slot in `entries`.
#[derive(Clone, Debug, Default)]
pub struct FrequencyList {
	entries: Vec<CharCount>,
	positions: HashMap<char, usize>,
}

impl FrequencyList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct characters in the list.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Records one occurrence of `chr`.
	///
	/// - If `chr` is already present, its count is increased (position unchanged).
	/// - Otherwise a new entry with a count of 1 is inserted at the front.
	pub fn update(&mut self, chr: char) {
		if let Some(&slot) = self.positions.get(&chr) {
			self.entries[slot].count += 1;
			return;
		}
		self.positions.insert(chr, self.entries.len());
		self.entries.push(CharCount::new(chr));
	}

	/// Returns the 0-based position of `chr` in list order, or `None` if absent.
	pub fn index_of(&self, chr: char) -> Option<usize> {
		self.positions.get(&chr).map(|&slot| self.to_index(slot))
	}

	/// Removes the entry for `chr`.
	///
	/// Returns `true` if an entry was removed.
	pub fn remove(&mut self, chr: char) -> bool {
		let Some(slot) = self.positions.remove(&chr) else {
			return false;
		};
		self.entries.remove(slot);
		for position in self.positions.values_mut() {
			if *position > slot {
				*position -= 1;
			}
		}
		true
	}

	/// Returns the entry at `index` in list order.
	///
	/// # Errors
	/// Returns `Error::IndexOutOfRange` if `index` is not in `[0, len)`.
	pub fn get(&self, index: usize) -> Result<&CharCount> {
		let size = self.len();
		if index >= size {
			return Err(Error::IndexOutOfRange { index, size });
		}
		Ok(&self.entries[self.to_index(index)])
	}

	/// Returns the front entry.
	///
	/// # Errors
	/// Returns `Error::EmptyList` if the list is empty.
	pub fn get_first(&self) -> Result<&CharCount> {
		self.entries.last().ok_or(Error::EmptyList)
	}

	/// Iterates over the entries in list order (front first).
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CharCount> + ExactSizeIterator {
		self.entries.iter().rev()
	}

	/// Iterates over the entries in list order, starting at `index`.
	///
	/// # Errors
	/// Returns `Error::IndexOutOfRange` if `index` is not in `[0, len)`.
	pub fn iter_from(&self, index: usize) -> Result<impl Iterator<Item = &CharCount>> {
		let size = self.len();
		if index >= size {
			return Err(Error::IndexOutOfRange { index, size });
		}
		Ok(self.iter().skip(index))
	}

	/// Snapshot of the entries in list order.
	pub fn to_vec(&self) -> Vec<CharCount> {
		self.iter().cloned().collect()
	}

	/// Sum of all occurrence counts.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(CharCount::count).sum()
	}

	/// Recomputes `probability` and `cumulative_probability` from the counts.
	///
	/// Walks the list in order, accumulating probabilities, then pins the
	/// last entry's cumulative probability to exactly 1.0 so that a draw
	/// in `[0, 1)` always lands on an entry.
	pub(crate) fn calculate_probabilities(&mut self) {
		if self.entries.is_empty() {
			return;
		}

		let total = self.total_count() as f64;
		let mut cumulative = 0.0;
		for entry in self.entries.iter_mut().rev() {
			entry.probability = entry.count as f64 / total;
			cumulative += entry.probability;
			entry.cumulative_probability = cumulative;
		}

		// Last in list order is the first slot
		self.entries[0].cumulative_probability = 1.0;
	}

	/// Converts between list order and storage slot (the mapping is its own inverse).
	fn to_index(&self, slot: usize) -> usize {
		self.entries.len() - 1 - slot
	}
}

impl fmt::Display for FrequencyList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, entry) in self.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
		}
		write!(f, ")")
	}
}
