use rand::Rng;

use crate::error::{MarkovError, Result};
use super::generator;
use super::segmentation::{Chars, Segmentation};
use super::table::FrequencyTable;

/// Multi-order Markov predictor.
///
/// Holds one `FrequencyTable` per order, from 1 up to `size`, all built once
/// from the same source tokens and never modified afterwards.
///
/// # Responsibilities
/// - Build the table set from a tokenized source
/// - Select the table whose order matches the length of a context
/// - Sample the next token from that table
///
/// # Invariants
/// - `tables.len() == size` and `size >= 1`
/// - `tables[i].order() == i + 1`
#[derive(Clone, Debug)]
pub struct Predictor<S = Chars> {
	tables: Vec<FrequencyTable>,
	size: usize,
	segmentation: S,
}

impl<S: Segmentation> Predictor<S> {
	/// Builds a predictor from pre-tokenized source.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `max_order` is 0.
	pub fn new<T: AsRef<str>>(tokens: &[T], max_order: usize, segmentation: S) -> Result<Self> {
		if max_order == 0 {
			return Err(MarkovError::InvalidOrder(max_order));
		}

		let tables: Vec<FrequencyTable> = (1..=max_order)
			.map(|order| FrequencyTable::build(tokens, order, &segmentation))
			.collect();

		log::info!(
			"built {} predictor: size {}, {} tokens, contexts per order {:?}",
			segmentation.name(),
			max_order,
			tokens.len(),
			tables.iter().map(FrequencyTable::len).collect::<Vec<_>>()
		);

		Ok(Self { tables, size: max_order, segmentation })
	}

	/// Tokenizes `text` with `segmentation` and builds a predictor from it.
	pub fn from_text(text: &str, max_order: usize, segmentation: S) -> Result<Self> {
		let tokens = segmentation.tokenize(text);
		Self::new(&tokens, max_order, segmentation)
	}

	/// Maximum context length accepted by `predict`.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Strategy measuring context lengths and joining tokens into keys.
	pub fn segmentation(&self) -> &S {
		&self.segmentation
	}

	/// All tables, index `i` holding order `i + 1`.
	pub fn tables(&self) -> &[FrequencyTable] {
		&self.tables
	}

	/// Table of the given order, `None` outside `1..=size`.
	pub fn table(&self, order: usize) -> Option<&FrequencyTable> {
		order.checked_sub(1).and_then(|index| self.tables.get(index))
	}

	/// Predicts the next token following `context`.
	///
	/// The context length is measured by the active segmentation (characters
	/// or words), and selects the table of the same order.
	///
	/// # Errors
	/// - `LengthExceeded` if the context is longer than `size`
	/// - `NotFound` if the context has no recorded continuation, including
	///   the empty context
	pub fn predict<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> Result<String> {
		let length = self.segmentation.context_len(context);
		if length > self.size {
			return Err(MarkovError::LengthExceeded {
				context: context.to_owned(),
				length,
				size: self.size,
			});
		}

		let token = self
			.table(length)
			.and_then(|table| table.get(context))
			.and_then(|transitions| transitions.sample(rng))
			.ok_or_else(|| MarkovError::NotFound(context.to_owned()))?;

		log::trace!("{:?} -> {:?}", context, token);
		Ok(token.to_owned())
	}

	/// Returns a random context of the highest order that has any.
	///
	/// Returns `None` if every table is empty.
	pub fn random_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
		self.tables
			.iter()
			.rev()
			.find(|table| !table.is_empty())
			.and_then(|table| table.random_context(rng))
			.map(str::to_owned)
	}

	/// Generates `count` tokens after `seed`, using the segmentation's own
	/// tokenizer and separator.
	///
	/// # Errors
	/// Fails as soon as one prediction fails (see `generate`).
	pub fn generate_from<R: Rng + ?Sized>(
		&self,
		seed: &str,
		count: usize,
		rng: &mut R,
	) -> Result<String> {
		let seed_tokens = self.segmentation.tokenize(seed);
		generator::generate(self, count, &seed_tokens, self.segmentation.separator(), rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::segmentation::Words;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(0xC0FFEE)
	}

	#[test]
	fn ab_predicts_b() {
		let predictor = Predictor::from_text("ab", 1, Chars).unwrap();
		let mut rng = rng();
		assert_eq!(predictor.predict("a", &mut rng).unwrap(), "b");
		assert!(predictor.predict("z", &mut rng).unwrap_err().is_not_found());
	}

	#[test]
	fn abcda_predicts_b() {
		let predictor = Predictor::from_text("abcda", 1, Chars).unwrap();
		assert_eq!(predictor.predict("a", &mut rng()).unwrap(), "b");
	}

	#[test]
	fn tables_per_order() {
		let predictor = Predictor::from_text("abcs", 5, Chars).unwrap();
		assert_eq!(predictor.size(), 5);
		assert_eq!(predictor.tables().len(), 5);
		let lens: Vec<usize> = predictor.tables().iter().map(FrequencyTable::len).collect();
		assert_eq!(lens, vec![3, 2, 1, 0, 0]);
		for (i, table) in predictor.tables().iter().enumerate() {
			assert_eq!(table.order(), i + 1);
		}
		assert!(predictor.table(0).is_none());
		assert!(predictor.table(6).is_none());
		assert_eq!(predictor.table(3).and_then(|t| t.get("abc")).map(|t| t.count("s")), Some(1));
	}

	#[test]
	fn zero_order_is_rejected() {
		let err = Predictor::from_text("abc", 0, Chars).unwrap_err();
		assert!(matches!(err, MarkovError::InvalidOrder(0)));
	}

	#[test]
	fn longer_context_exceeds() {
		let predictor = Predictor::from_text("abcs", 2, Chars).unwrap();
		let err = predictor.predict("abc", &mut rng()).unwrap_err();
		assert!(err.is_length_exceeded());
		assert_eq!(err.to_string(), "abc's length 3 exceeds the size 2");
	}

	#[test]
	fn context_selects_table_by_length() {
		let predictor = Predictor::from_text("abcs", 3, Chars).unwrap();
		let mut rng = rng();
		assert_eq!(predictor.predict("b", &mut rng).unwrap(), "c");
		assert_eq!(predictor.predict("bc", &mut rng).unwrap(), "s");
		assert_eq!(predictor.predict("abc", &mut rng).unwrap(), "s");
		assert!(predictor.predict("s", &mut rng).unwrap_err().is_not_found());
	}

	#[test]
	fn empty_context_is_not_found() {
		let predictor = Predictor::from_text("abc", 2, Chars).unwrap();
		assert!(predictor.predict("", &mut rng()).unwrap_err().is_not_found());
	}

	#[test]
	fn word_mode_counts_words() {
		let predictor = Predictor::from_text("hadi ama hadi neden", 2, Words).unwrap();
		let mut rng = rng();
		assert_eq!(predictor.predict("ama", &mut rng).unwrap(), "hadi");
		assert_eq!(predictor.predict("hadi ama", &mut rng).unwrap(), "hadi");
		assert!(predictor.predict("  hadi   ama ", &mut rng).unwrap_err().is_not_found());
		assert!(predictor.predict("hadi\tama", &mut rng).unwrap_err().is_not_found());
		let next = predictor.predict("hadi", &mut rng).unwrap();
		assert!(next == "ama" || next == "neden");
		assert!(predictor.predict("hadi ama hadi", &mut rng).unwrap_err().is_length_exceeded());
	}

	#[test]
	fn segmentation_is_kept() {
		let predictor = Predictor::from_text("hadi ama", 1, Words).unwrap();
		assert_eq!(predictor.segmentation(), &Words);
		assert_eq!(predictor.segmentation().separator(), " ");
	}

	#[test]
	fn random_context_uses_highest_filled_order() {
		let predictor = Predictor::from_text("abcs", 5, Chars).unwrap();
		assert_eq!(predictor.random_context(&mut rng()).as_deref(), Some("abc"));

		let predictor = Predictor::from_text("a", 2, Chars).unwrap();
		assert_eq!(predictor.random_context(&mut rng()), None);
	}

	#[test]
	fn generate_from_uses_segmentation_separator() {
		let predictor = Predictor::from_text("one two three", 1, Words).unwrap();
		assert_eq!(predictor.generate_from("one", 2, &mut rng()).unwrap(), "one two three");

		let predictor = Predictor::from_text("abcd", 2, Chars).unwrap();
		assert_eq!(predictor.generate_from("a", 3, &mut rng()).unwrap(), "abcd");
	}
}
