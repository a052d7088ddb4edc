use std::collections::BTreeMap;

use rand::Rng;

/// Observed continuations of a single context.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate continuation occurrences while a table is built
/// - Sample the next token using weighted random sampling
///
/// ## Invariants
/// - Each occurrence count is strictly positive
/// - Tokens are kept in sorted order, so sampling with a seeded generator
///   is reproducible across runs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
	/// Occurrences indexed by the next token.
	/// Example: { "e" => 42, "a" => 3 }
	counts: BTreeMap<String, usize>,
}

impl Transitions {
	/// Creates an empty set of continuations.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `next_token`.
	///
	/// - If the token was already seen, its count is increased.
	/// - Otherwise, it is inserted with a count of 1.
	pub fn add(&mut self, next_token: &str) {
		match self.counts.get_mut(next_token) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(next_token.to_owned(), 1);
			}
		}
	}

	/// Number of times `token` followed this context (0 if never).
	pub fn count(&self, token: &str) -> usize {
		self.counts.get(token).copied().unwrap_or(0)
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct continuations.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(token, count)` pairs in token order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(token, count)| (token.as_str(), *count))
	}

	/// Samples the next token with probability proportional to its count.
	///
	/// This method performs:
	/// - an O(n) scan to compute the total
	/// - a cumulative subtraction to select a bucket
	///
	/// It draws exactly one number from `rng`, and is equivalent to repeating
	/// every token `count` times and picking uniformly from that list.
	///
	/// Returns `None` if there are no continuations.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for (token, count) in &self.counts {
			if r < *count {
				return Some(token.as_str());
			}
			r -= count;
		}

		// Unreachable while every count is positive
		None
	}
}

impl FromIterator<(String, usize)> for Transitions {
	/// Builds continuations from explicit counts. Zero counts are dropped.
	fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
		let counts = iter.into_iter().filter(|(_, count)| *count > 0).collect();
		Self { counts }
	}
}
