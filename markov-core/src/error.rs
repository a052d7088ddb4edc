use thiserror::Error;

/// Errors raised while building or querying a predictor.
///
/// `LengthExceeded` and `NotFound` are the two prediction failures. Both are
/// recoverable: callers are expected to report them and carry on.
#[derive(Error, Debug)]
pub enum MarkovError {
	#[error("{context}'s length {length} exceeds the size {size}")]
	LengthExceeded {
		context: String,
		length: usize,
		size: usize,
	},

	#[error("{0} not in table")]
	NotFound(String),

	#[error("Invalid order: {0}, must be >= 1")]
	InvalidOrder(usize),

	#[error("Unknown encoding: {0}")]
	UnknownEncoding(String),

	#[error("Malformed input for encoding {encoding}")]
	Decode { encoding: String },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl MarkovError {
	/// True when the context had no recorded continuation.
	pub fn is_not_found(&self) -> bool {
		matches!(self, MarkovError::NotFound(_))
	}

	/// True when the context was longer than the predictor's size.
	pub fn is_length_exceeded(&self) -> bool {
		matches!(self, MarkovError::LengthExceeded { .. })
	}
}

pub type Result<T> = std::result::Result<T, MarkovError>;
