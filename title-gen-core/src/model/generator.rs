use log::{debug, warn};

use super::completion_input::CompletionInput;
use super::context::Context;
use super::sampler::{RandomSampler, Sampler};
use super::token::{join, tokenize, Token};
use super::transition_table::TransitionTable;

/// High-level generator completing seed phrases into sentences.
///
/// # Responsibilities
/// - Own a trained, read-only `TransitionTable`
/// - Extend a tokenized seed one sampled token at a time
/// - Stop according to the completion bounds and sentence endings
#[derive(Clone, Debug, Default)]
pub struct Generator {
	table: TransitionTable,
}

impl Generator {
	/// Creates a generator from an already trained table.
	pub fn new(table: TransitionTable) -> Self {
		Self { table }
	}

	/// Trains a table on `titles` and wraps it in a generator.
	pub fn train<I, S>(titles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(TransitionTable::train(titles))
	}

	/// Returns the underlying transition table.
	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Completes `seed` into a sentence, drawing tokens with `sampler`.
	///
	/// # Parameters
	/// - `seed`: the phrase to complete, an empty string is accepted
	/// - `input`: minimum/maximum number of tokens of the result
	/// - `sampler`: picks one continuation among the observed ones
	///
	/// # Returns
	/// - `Ok(String)`: the tokens joined with single spaces
	/// - `Err(String)`: if `input.min_length > input.max_length`
	///
	/// # Behavior
	/// - Before every step the sentence is checked for completion: it holds
	///   `max_length` tokens, or at least `min_length` tokens ending with
	///   `.`, `?` or `!`.
	/// - The next token is sampled from the continuations of the last two
	///   tokens. A context without continuations ends the completion, even
	///   below `min_length`.
	/// - A seed longer than `max_length` is cut down to `max_length` tokens.
	pub fn complete<S>(&self, seed: &str, input: &CompletionInput, sampler: &mut S) -> Result<String, String>
	where
		S: Sampler + ?Sized,
	{
		input.validate()?;

		let mut tokens = tokenize(seed);
		if tokens.len() > input.max_length {
			warn!("seed has {} tokens, truncated to {}", tokens.len(), input.max_length);
			tokens.truncate(input.max_length);
		}
		debug!("tokens: {:?}", tokens);

		while !Self::is_complete(&tokens, input) {
			let context = Context::of(&tokens);
			match sampler.sample(self.table.continuations(&context)) {
				Some(token) => {
					debug!("{} -> {}", context, token);
					tokens.push(token.clone());
				}
				None => {
					debug!("no continuation for {}", context);
					break;
				}
			}
		}

		Ok(join(&tokens))
	}

	/// Completes `seed` using the thread-local random generator.
	///
	/// # Errors
	/// Returns an error if `input.min_length > input.max_length`.
	pub fn complete_sentence(&self, seed: &str, input: &CompletionInput) -> Result<String, String> {
		self.complete(seed, input, &mut RandomSampler::new())
	}

	/// Checks whether a token sequence forms a complete sentence.
	///
	/// `max_length` takes precedence over punctuation. An empty sequence
	/// counts as ending with an absent token.
	fn is_complete(tokens: &[Token], input: &CompletionInput) -> bool {
		tokens.len() >= input.max_length
			|| (tokens.len() >= input.min_length && tokens.last().is_none_or(Token::is_terminal))
	}
}
