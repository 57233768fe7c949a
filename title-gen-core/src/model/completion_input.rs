/// Default lower bound on the completed sentence length.
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Default upper bound on the completed sentence length.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Length bounds of a completion, counted in tokens (seed included).
///
/// # Responsibilities
/// - `min_length`: a sentence ending with `.`, `?` or `!` is only accepted
///   once it holds at least this many tokens
/// - `max_length`: hard ceiling, the completion stops here whatever the
///   last token is
///
/// # Invariants
/// - `min_length <= max_length`, checked by `validate` (and by the generator
///   before every completion since the fields are public)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionInput {
	pub min_length: usize,
	pub max_length: usize,
}

impl Default for CompletionInput {
	fn default() -> Self {
		Self { min_length: DEFAULT_MIN_LENGTH, max_length: DEFAULT_MAX_LENGTH }
	}
}

impl CompletionInput {
	/// Creates validated completion bounds.
	///
	/// # Errors
	/// Returns an error if `min_length > max_length`.
	pub fn new(min_length: usize, max_length: usize) -> Result<Self, String> {
		let input = Self { min_length, max_length };
		input.validate()?;
		Ok(input)
	}

	/// Checks the bounds invariant.
	///
	/// # Errors
	/// Returns an error if `min_length > max_length`.
	pub fn validate(&self) -> Result<(), String> {
		if self.min_length > self.max_length {
			return Err(format!(
				"min_length ({}) must be <= max_length ({})",
				self.min_length, self.max_length
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let input = CompletionInput::default();
		assert_eq!(input.min_length, 5);
		assert_eq!(input.max_length, 20);
		assert!(input.validate().is_ok());
	}

	#[test]
	fn equal_bounds_are_valid() {
		assert!(CompletionInput::new(0, 0).is_ok());
		assert!(CompletionInput::new(3, 3).is_ok());
	}

	#[test]
	fn inverted_bounds_are_rejected() {
		let err = CompletionInput::new(6, 5).unwrap_err();
		assert!(err.contains("min_length"));

		let input = CompletionInput { min_length: 10, max_length: 2 };
		assert!(input.validate().is_err());
	}
}
