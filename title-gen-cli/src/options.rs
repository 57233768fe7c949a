use std::path::PathBuf;

/// Positional inputs triggering the help text followed by a demonstration run.
const HELP_INPUTS: [&str; 4] = ["", "test", "help", "-?"];

/// Command-line options.
///
/// Every optional value falls back to a default when the completion runs.
#[derive(Debug, Default, PartialEq)]
pub struct Options {
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	/// Read the corpus from this file; the positional text is then the seed.
	pub corpus: Option<PathBuf>,
	/// Seed of the sampling generator, for reproducible runs.
	pub rng_seed: Option<u64>,
	/// Print the trained transition table as JSON.
	pub dump_model: bool,
	/// `--help` was given, whatever the other arguments.
	pub help: bool,
	/// Positional words, joined with a space.
	pub input: String,
}

impl Options {
	/// Parses the arguments (program name excluded).
	///
	/// # Errors
	/// Returns an error on unknown options or invalid numbers.
	pub fn parse<I, S>(args: I) -> Result<Self, String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut options = Self::default();
		let mut words = Vec::new();

		for arg in args {
			let arg = arg.as_ref();
			if let Some(value) = arg.strip_prefix("--min-length=") {
				options.min_length = Some(parse_number(value, "--min-length")?);
			} else if let Some(value) = arg.strip_prefix("--max-length=") {
				options.max_length = Some(parse_number(value, "--max-length")?);
			} else if let Some(value) = arg.strip_prefix("--rng-seed=") {
				options.rng_seed = Some(parse_number(value, "--rng-seed")?);
			} else if let Some(value) = arg.strip_prefix("--corpus=") {
				if value.is_empty() {
					return Err("--corpus cannot be empty".to_owned());
				}
				options.corpus = Some(PathBuf::from(value));
			} else if arg == "--dump-model" {
				options.dump_model = true;
			} else if arg == "--help" {
				options.help = true;
			} else if arg.starts_with("--") {
				return Err(format!("Unknown option: {}", arg));
			} else {
				words.push(arg.to_owned());
			}
		}

		options.input = words.join(" ");
		Ok(options)
	}

	/// Whether the run should print the help and use the default input.
	pub fn wants_help(&self) -> bool {
		self.help || (self.corpus.is_none() && HELP_INPUTS.iter().any(|help| *help == self.input.trim()))
	}
}

fn parse_number<T: std::str::FromStr>(value: &str, option: &str) -> Result<T, String> {
	value
		.parse()
		.map_err(|_| format!("{} expects a non-negative integer, got '{}'", option, value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positional_words_form_the_input() {
		let options = Options::parse(["go", "down", "joe!|go"]).unwrap();
		assert_eq!(options.input, "go down joe!|go");
		assert!(!options.wants_help());
	}

	#[test]
	fn parses_every_option() {
		let options = Options::parse([
			"--min-length=2",
			"--max-length=9",
			"--rng-seed=42",
			"--corpus=titles.txt",
			"--dump-model",
			"go",
		])
		.unwrap();

		assert_eq!(options.min_length, Some(2));
		assert_eq!(options.max_length, Some(9));
		assert_eq!(options.rng_seed, Some(42));
		assert_eq!(options.corpus, Some(PathBuf::from("titles.txt")));
		assert!(options.dump_model);
		assert_eq!(options.input, "go");
	}

	#[test]
	fn help_inputs() {
		for args in [vec![], vec!["test"], vec!["help"], vec!["--help"], vec!["-?"]] {
			assert!(Options::parse(args).unwrap().wants_help());
		}
		assert!(!Options::parse(["--corpus=titles.txt"]).unwrap().wants_help());
	}

	#[test]
	fn help_flag_wins_over_other_arguments() {
		let options = Options::parse(["--corpus=titles.txt", "--help"]).unwrap();
		assert!(options.help);
		assert!(options.wants_help());
		assert_eq!(options.input, "");

		let options = Options::parse(["--help", "extra"]).unwrap();
		assert!(options.wants_help());
		assert_eq!(options.input, "extra");
	}

	#[test]
	fn rejects_bad_values() {
		assert!(Options::parse(["--min-length=-1"]).is_err());
		assert!(Options::parse(["--max-length=many"]).is_err());
		assert!(Options::parse(["--corpus="]).is_err());
		assert!(Options::parse(["--verbose"]).is_err());
	}
}
