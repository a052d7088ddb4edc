use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::segmentation::Segmentation;
use super::transitions::Transitions;

/// Frequency table of a fixed order.
///
/// Maps every context of exactly `order` tokens seen in the source to the
/// tokens that followed it, with their occurrence counts.
///
/// # Invariants
/// - `order` is >= 1 for any table built from a non-empty window
/// - Every key is made of exactly `order` tokens joined by the separator
///   it was built with
/// - Every recorded count is >= 1
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Number of tokens per context.
	order: usize,

	/// Mapping from a context key to its continuations
	contexts: HashMap<String, Transitions>,
}

/// Builds the frequency table of `order` over `tokens`.
///
/// For every position `i` where `tokens[i..i + order]` and `tokens[i + order]`
/// both exist, the context key is the window joined with `separator` and the
/// count of `tokens[i + order]` under that key is increased by one.
///
/// An empty sequence, an order of 0, or an order reaching past the end of the
/// sequence yields an empty table.
///
/// ```
/// use markov_core::build_table;
///
/// let tokens: Vec<String> = "abcdabc".chars().map(String::from).collect();
/// let table = build_table(&tokens, 1, "");
/// assert_eq!(table.get("a").map(|t| t.count("b")), Some(2));
/// ```
pub fn build_table<T: AsRef<str>>(tokens: &[T], order: usize, separator: &str) -> FrequencyTable {
	let mut table = FrequencyTable::empty(order);
	if order == 0 {
		return table;
	}

	for window in tokens.windows(order + 1) {
		let (context, next) = window.split_at(order);
		let key = join(context, separator);
		table.contexts.entry(key).or_default().add(next[0].as_ref());
	}

	log::debug!("built order-{} table with {} contexts", order, table.contexts.len());
	table
}

fn join<T: AsRef<str>>(tokens: &[T], separator: &str) -> String {
	let mut key = String::new();
	for (i, token) in tokens.iter().enumerate() {
		if i > 0 {
			key.push_str(separator);
		}
		key.push_str(token.as_ref());
	}
	key
}

impl FrequencyTable {
	/// Creates a table of the given order without any context.
	pub fn empty(order: usize) -> Self {
		Self { order, contexts: HashMap::new() }
	}

	/// Builds a table keyed the way `segmentation` joins tokens.
	pub fn build<T, S>(tokens: &[T], order: usize, segmentation: &S) -> Self
	where
		T: AsRef<str>,
		S: Segmentation + ?Sized,
	{
		build_table(tokens, order, segmentation.separator())
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Continuations recorded for `context`, if any.
	pub fn get(&self, context: &str) -> Option<&Transitions> {
		self.contexts.get(context)
	}

	/// Iterates over all `(context, continuations)` pairs, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = (&str, &Transitions)> {
		self.contexts.iter().map(|(key, transitions)| (key.as_str(), transitions))
	}

	/// Returns a uniformly chosen context of this table.
	///
	/// Useful for starting a generation sequence. Keys are sorted before the
	/// draw so a seeded generator always picks the same context.
	/// Returns `None` if the table is empty.
	pub fn random_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let mut keys: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys.choose(rng).copied()
	}
}
