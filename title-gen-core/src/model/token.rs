use std::fmt;

use serde::Serialize;

/// Characters marking the end of a sentence.
const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// A single word of a title.
///
/// A `Token` is a whitespace-delimited piece of text, lowercased, with its
/// punctuation kept attached (`"there!"`, `"what's"`, `"hey,"`).
///
/// # Invariants
/// - The inner string is already case-folded
/// - The inner string never contains whitespace when built by `tokenize`
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
	/// Creates a token from a word, converting it to lowercase.
	pub fn new(word: &str) -> Self {
		Self(word.to_lowercase())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns `true` if the token ends a sentence (`.`, `?` or `!`).
	pub fn is_terminal(&self) -> bool {
		self.0.ends_with(TERMINATORS)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Breaks a text into tokens.
///
/// - Splits on runs of whitespace, ignoring leading/trailing whitespace
/// - Lowercases every word
/// - Keeps punctuation glued to its word so sentence endings survive
///
/// An empty (or blank) text yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
	text.split_whitespace().map(Token::new).collect()
}

/// Joins tokens with a single space and trims the result.
pub fn join(tokens: &[Token]) -> String {
	tokens
		.iter()
		.map(Token::as_str)
		.collect::<Vec<_>>()
		.join(" ")
		.trim()
		.to_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokenize_lowercases_and_keeps_punctuation() {
		let tokens = tokenize("  Hey, Hi   What's that SOUND?\n");
		let words: Vec<&str> = tokens.iter().map(Token::as_str).collect();
		assert_eq!(words, vec!["hey,", "hi", "what's", "that", "sound?"]);
	}

	#[test]
	fn tokenize_blank_text_is_empty() {
		assert!(tokenize("").is_empty());
		assert!(tokenize(" \t\n ").is_empty());
	}

	#[test]
	fn tokenize_is_idempotent_after_join() {
		let tokens = tokenize("Go  DOWN\tJoe!");
		assert_eq!(tokenize(&join(&tokens)), tokens);
	}

	#[test]
	fn terminal_tokens() {
		assert!(Token::new("joe!").is_terminal());
		assert!(Token::new("here?").is_terminal());
		assert!(Token::new("hill.").is_terminal());
		assert!(!Token::new("hey,").is_terminal());
		assert!(!Token::new("what's").is_terminal());
	}

	#[test]
	fn join_uses_single_spaces() {
		let tokens = vec![Token::new("go"), Token::new("up"), Token::new("mike!")];
		assert_eq!(join(&tokens), "go up mike!");
		assert_eq!(join(&[]), "");
	}
}
