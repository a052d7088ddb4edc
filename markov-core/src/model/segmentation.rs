/// How source text is cut into tokens, and how a context's length is measured.
///
/// The predictor uses `context_len` to pick the table of matching order and
/// `separator` to join tokens into context keys. Both must agree with the way
/// the tables were built.
pub trait Segmentation {
	/// Short human-readable name ("char" or "word").
	fn name(&self) -> &'static str;

	/// String placed between tokens when forming a context key.
	fn separator(&self) -> &'static str;

	/// Splits raw text into tokens.
	fn tokenize(&self, text: &str) -> Vec<String>;

	/// Number of tokens in `context`.
	fn context_len(&self, context: &str) -> usize;
}

/// Character segmentation: every `char` is a token, keys are concatenations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chars;

/// Word segmentation: whitespace-delimited words, keys joined by one space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Words;

impl Segmentation for Chars {
	fn name(&self) -> &'static str {
		"char"
	}

	fn separator(&self) -> &'static str {
		""
	}

	fn tokenize(&self, text: &str) -> Vec<String> {
		text.chars().map(String::from).collect()
	}

	fn context_len(&self, context: &str) -> usize {
		context.chars().count()
	}
}

impl Segmentation for Words {
	fn name(&self) -> &'static str {
		"word"
	}

	fn separator(&self) -> &'static str {
		" "
	}

	fn tokenize(&self, text: &str) -> Vec<String> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	fn context_len(&self, context: &str) -> usize {
		context.split_whitespace().count()
	}
}
