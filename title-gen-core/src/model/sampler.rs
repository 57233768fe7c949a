use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::token::Token;

/// Picks the next token among the observed continuations of a context.
///
/// Candidates form a multiset: a token recorded several times must be
/// proportionally more likely to be picked.
///
/// Returns `None` if and only if `candidates` is empty.
pub trait Sampler {
	fn sample<'a>(&mut self, candidates: &'a [Token]) -> Option<&'a Token>;
}

/// Uniform random choice over the candidates, duplicates included.
#[derive(Debug)]
pub struct RandomSampler<R> {
	rng: R,
}

impl RandomSampler<ThreadRng> {
	/// Creates a sampler backed by the thread-local generator.
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for RandomSampler<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl RandomSampler<StdRng> {
	/// Creates a reproducible sampler from a fixed seed.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl<R: Rng> RandomSampler<R> {
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}
}

impl<R: Rng> Sampler for RandomSampler<R> {
	fn sample<'a>(&mut self, candidates: &'a [Token]) -> Option<&'a Token> {
		candidates.choose(&mut self.rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::token::tokenize;

	#[test]
	fn empty_candidates_yield_none() {
		assert!(RandomSampler::seeded(7).sample(&[]).is_none());
	}

	#[test]
	fn single_candidate_is_always_picked() {
		let candidates = tokenize("down");
		let mut sampler = RandomSampler::new();
		for _ in 0..10 {
			assert_eq!(sampler.sample(&candidates), Some(&candidates[0]));
		}
	}

	#[test]
	fn same_seed_same_choices() {
		let candidates = tokenize("down up up does");
		let mut a = RandomSampler::seeded(42);
		let mut b = RandomSampler::seeded(42);
		for _ in 0..32 {
			assert_eq!(a.sample(&candidates), b.sample(&candidates));
		}
	}

	#[test]
	fn duplicates_weight_the_choice() {
		// "up" is recorded three times out of four
		let candidates = tokenize("up up up down");
		let mut sampler = RandomSampler::seeded(1);
		let ups = (0..4000)
			.filter(|_| sampler.sample(&candidates).map(Token::as_str) == Some("up"))
			.count();
		assert!((2700..3300).contains(&ups), "unexpected frequency: {ups}");
	}
}
