use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{MarkovError, Result};
use crate::model::predictor::Predictor;
use crate::model::segmentation::Segmentation;

/// Encoding used when none is given.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Decodes raw bytes using an encoding label (`"utf-8"`, `"latin1"`,
/// `"windows-1254"`, ...).
///
/// - A leading byte order mark overrides the label
/// - Malformed sequences are an error, never replaced silently
pub fn decode(bytes: &[u8], encoding: &str) -> Result<String> {
	let label = encoding.trim();
	let encoding = Encoding::for_label(label.as_bytes())
		.ok_or_else(|| MarkovError::UnknownEncoding(label.to_owned()))?;

	let (text, used, had_errors) = encoding.decode(bytes);
	if had_errors {
		return Err(MarkovError::Decode { encoding: used.name().to_owned() });
	}
	Ok(text.into_owned())
}

/// Reads a whole text file and decodes it with `encoding`.
pub fn read_text<P: AsRef<Path>>(path: P, encoding: &str) -> Result<String> {
	let path = path.as_ref();
	let bytes = fs::read(path)?;
	log::debug!("read {} bytes from {}", bytes.len(), path.display());
	decode(&bytes, encoding)
}

/// Loads a text file and builds a predictor over it.
///
/// The text is tokenized by `segmentation`: characters, or whitespace-delimited
/// words.
///
/// # Errors
/// - I/O errors from reading the file
/// - `UnknownEncoding` / `Decode` if the bytes cannot be decoded
/// - `InvalidOrder` if `max_order` is 0
pub fn load<P, S>(
	path: P,
	encoding: &str,
	max_order: usize,
	segmentation: S,
) -> Result<Predictor<S>>
where
	P: AsRef<Path>,
	S: Segmentation,
{
	let text = read_text(path, encoding)?;
	Predictor::from_text(&text, max_order, segmentation)
}
