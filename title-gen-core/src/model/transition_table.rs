use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::context::Context;
use super::token::{tokenize, Token};

/// Observed continuations of a single context.
///
/// Returned by `TransitionTable::entries` to inspect or dump a trained table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TransitionEntry {
	pub context: Context,
	pub continuations: Vec<Token>,
}

/// Second-order, backward-built Markov transition table.
///
/// Maps the two tokens preceding a word (`Context`) to every word observed
/// right after them. Duplicates are kept so that frequent continuations
/// are sampled more often.
///
/// # Responsibilities
/// - Build the table from titles
/// - Look up the continuations of a context without mutating the table
///
/// # Invariants
/// - Every stored sequence holds at least one token
/// - The total number of stored tokens equals the number of tokens trained on
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	/// Mapping from a context to the tokens observed after it.
	/// Example: { ("go", "up") => ["mike!", "and"] }
	transitions: HashMap<Context, Vec<Token>>,
}

impl TransitionTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a table from a collection of titles.
	pub fn train<I, S>(titles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut table = Self::new();
		for title in titles {
			table.add_title(title.as_ref());
		}
		debug!("trained {} contexts from {} tokens", table.len(), table.recorded());
		table
	}

	/// Adds a title to the table.
	///
	/// Walks the title from its end: the last remaining token is removed and
	/// recorded under the context formed by the two tokens now ending the
	/// sequence. Titles shorter than two tokens still contribute through
	/// contexts with absent slots.
	pub fn add_title(&mut self, title: &str) {
		let mut tokens = tokenize(title);
		while let Some(token) = tokens.pop() {
			let context = Context::of(&tokens);
			self.transitions.entry(context).or_default().push(token);
		}
	}

	/// Returns the tokens observed after `context`.
	///
	/// An unseen context yields an empty slice; the table is never modified.
	pub fn continuations(&self, context: &Context) -> &[Token] {
		self.transitions.get(context).map(Vec::as_slice).unwrap_or_default()
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Total number of recorded tokens across all contexts.
	pub fn recorded(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Returns all entries sorted by context, for stable inspection.
	pub fn entries(&self) -> Vec<TransitionEntry> {
		let mut entries: Vec<TransitionEntry> = self
			.transitions
			.iter()
			.map(|(context, continuations)| TransitionEntry {
				context: context.clone(),
				continuations: continuations.clone(),
			})
			.collect();
		entries.sort_by(|a, b| a.context.cmp(&b.context));
		entries
	}
}
