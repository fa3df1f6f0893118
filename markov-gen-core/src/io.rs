use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole text file into a single `String`.
///
/// - Reads the entire file into memory
/// - Line endings are kept as-is, they are part of the corpus
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let io_error = |source| Error::Io {
		operation: format!("read corpus {}", path.display()),
		source,
	};

	let mut contents = String::new();
	File::open(path)
		.map_err(io_error)?
		.read_to_string(&mut contents)
		.map_err(io_error)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_is_an_io_error() {
		let err = read_corpus("does/not/exist.txt").unwrap_err();
		assert!(matches!(err, Error::Io { .. }));
		assert!(err.to_string().starts_with("failed to read corpus"));
	}

	#[test]
	fn reads_whole_file() {
		let path = std::env::temp_dir().join("markov_gen_core_read_corpus.txt");
		std::fs::write(&path, "line one\nline two\n").unwrap();
		assert_eq!(read_corpus(&path).unwrap(), "line one\nline two\n");
		std::fs::remove_file(&path).unwrap();
	}
}
