use std::fmt;

use serde::Serialize;

use super::token::Token;

/// The two tokens preceding a candidate token.
///
/// A `Context` is the key of the transition table. `None` in a slot marks
/// an absent token: the start of a title, or fewer than two tokens so far.
///
/// ## Invariants
/// - Always exactly two slots
/// - If `previous` is present then `last` is present too
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context {
	/// Token before the last one (`t[-2]`).
	previous: Option<Token>,
	/// Most recent token (`t[-1]`).
	last: Option<Token>,
}

impl Context {
	/// The sentence-start context: both slots absent.
	pub fn start() -> Self {
		Self::default()
	}

	/// Computes the context following a sequence of tokens.
	///
	/// Takes `(t[-2], t[-1])` of `tokens`, using an absent slot where the
	/// sequence is too short.
	pub fn of(tokens: &[Token]) -> Self {
		match tokens {
			[] => Self::start(),
			[last] => Self { previous: None, last: Some(last.clone()) },
			[.., previous, last] => Self {
				previous: Some(previous.clone()),
				last: Some(last.clone()),
			},
		}
	}

	pub fn previous(&self) -> Option<&Token> {
		self.previous.as_ref()
	}

	pub fn last(&self) -> Option<&Token> {
		self.last.as_ref()
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let slot = |token: Option<&Token>| token.map_or("_", Token::as_str).to_owned();
		write!(f, "({}, {})", slot(self.previous()), slot(self.last()))
	}
}
