use std::io::{self, BufRead, Write};

use rand::Rng;

use markov_core::{Predictor, Segmentation};

/// Interactive read-predict loop.
///
/// Each line read from `input` is used as a context; the predicted token is
/// written to `output`. Contexts without continuation print `<context> missing`,
/// contexts longer than the predictor's size print the error and the loop
/// carries on. Ends on end-of-input; an interrupt terminates the process.
pub fn run<S, B, W, R>(
	predictor: &Predictor<S>,
	mut input: B,
	mut output: W,
	rng: &mut R,
) -> io::Result<()>
where
	S: Segmentation,
	B: BufRead,
	W: Write,
	R: Rng + ?Sized,
{
	let mut line = String::new();
	loop {
		write!(output, ">")?;
		output.flush()?;

		line.clear();
		match input.read_line(&mut line) {
			Ok(0) => {
				writeln!(output)?;
				break;
			}
			Ok(_) => {}
			Err(e) => return Err(e),
		}

		let context = line.trim_end_matches(['\n', '\r']);
		if context.is_empty() {
			continue;
		}

		match predictor.predict(context, rng) {
			Ok(token) => writeln!(output, "{}", token)?,
			Err(e) if e.is_not_found() => writeln!(output, "{} missing", context)?,
			Err(e) => {
				log::debug!("rejected context {:?}: {}", context, e);
				writeln!(output, "{}", e)?
			}
		}
	}
	Ok(())
}
