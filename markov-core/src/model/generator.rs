use rand::Rng;

use crate::error::Result;
use super::predictor::Predictor;
use super::segmentation::Segmentation;

/// Generates `count` tokens after `seed`, joined with `separator`.
///
/// The result starts with the seed tokens. At each step, the trailing window
/// of at most `predictor.size()` tokens is joined with `separator` and fed to
/// `predict`; the predicted token is appended and the window slides forward.
///
/// The separator must match the one the predictor's keys were built with
/// (`""` for characters, `" "` for words) for lookups to succeed.
///
/// # Errors
/// Returns the first prediction error (`NotFound` when the chain reaches a
/// context without continuation, including an empty seed).
pub fn generate<S, T, R>(
	predictor: &Predictor<S>,
	count: usize,
	seed: &[T],
	separator: &str,
	rng: &mut R,
) -> Result<String>
where
	S: Segmentation,
	T: AsRef<str>,
	R: Rng + ?Sized,
{
	let mut result: Vec<String> = seed.iter().map(|token| token.as_ref().to_owned()).collect();
	let size = predictor.size();

	for _ in 0..count {
		let start = result.len().saturating_sub(size);
		let context = result[start..].join(separator);
		let next = predictor.predict(&context, rng)?;
		result.push(next);
	}

	Ok(result.join(separator))
}
