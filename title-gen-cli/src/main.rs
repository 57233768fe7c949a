mod options;

use std::env;
use std::io;

use log::debug;
use title_gen_core::corpus::{default_input, read_titles, segment_titles, split_input};
use title_gen_core::model::completion_input::{CompletionInput, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use title_gen_core::model::generator::Generator;
use title_gen_core::model::sampler::RandomSampler;

use options::Options;

fn help(default_input: &str) -> String {
	[
		"Usage: title-gen [options] <titles>|<seed>".to_owned(),
		String::new(),
		"Options:".to_owned(),
		format!("  --min-length=N   Minimum sentence length in tokens (default: {})", DEFAULT_MIN_LENGTH),
		format!("  --max-length=N   Maximum sentence length in tokens (default: {})", DEFAULT_MAX_LENGTH),
		"  --corpus=FILE    Read titles from FILE, the arguments are then the seed".to_owned(),
		"  --rng-seed=N     Reproducible sampling".to_owned(),
		"  --dump-model     Print the trained transition table as JSON".to_owned(),
		String::new(),
		"Example:".to_owned(),
		format!("  title-gen {}", default_input),
	]
	.join("\n")
}

/// Titles and seed a run works on.
#[derive(Debug, PartialEq)]
struct RunInput {
	titles: Vec<String>,
	seed: String,
	/// Help text printed before a demonstration run.
	help: Option<String>,
}

/// Resolves where the titles and the seed come from.
///
/// - Help/demo mode: the default input, along with the help text
/// - `--corpus=FILE`: titles from the file, the positional text is the seed
/// - Otherwise: `"<titles>|<seed>"` from the positional text
fn resolve_input(options: &Options) -> io::Result<RunInput> {
	if options.wants_help() {
		let input = default_input();
		let (corpus, seed) = split_input(&input);
		return Ok(RunInput {
			titles: segment_titles(corpus),
			seed: seed.to_owned(),
			help: Some(help(&input)),
		});
	}

	if let Some(path) = &options.corpus {
		return Ok(RunInput { titles: read_titles(path)?, seed: options.input.clone(), help: None });
	}

	let (corpus, seed) = split_input(&options.input);
	Ok(RunInput { titles: segment_titles(corpus), seed: seed.to_owned(), help: None })
}

/// Renders the trained transition table as pretty JSON.
fn model_json(generator: &Generator) -> serde_json::Result<String> {
	serde_json::to_string_pretty(&generator.table().entries())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let options = Options::parse(env::args().skip(1))?;
	debug!("options: {:?}", options);

	let run = resolve_input(&options)?;
	if let Some(help) = &run.help {
		println!("{}", help);
	}
	debug!("titles: {:?}", run.titles);
	debug!("sentence to complete: {:?}", run.seed);

	let generator = Generator::train(&run.titles);
	if options.dump_model {
		println!("{}", model_json(&generator)?);
	}

	let input = CompletionInput::new(
		options.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
		options.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
	)?;

	let sentence = match options.rng_seed {
		Some(rng_seed) => generator.complete(&run.seed, &input, &mut RandomSampler::seeded(rng_seed))?,
		None => generator.complete_sentence(&run.seed, &input)?,
	};
	println!("{}", sentence);

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use title_gen_core::corpus::{DEFAULT_TITLES, SENTENCE_STUBS};

	#[test]
	fn blob_is_split_into_titles_and_seed() {
		let options = Options::parse(["go", "down", "joe!", "down", "town!|Go"]).unwrap();
		let run = resolve_input(&options).unwrap();

		assert_eq!(run.titles, vec!["go down joe!", "down town!"]);
		assert_eq!(run.seed, "Go");
		assert!(run.help.is_none());
	}

	#[test]
	fn help_mode_runs_on_the_default_input() {
		for args in [vec!["test"], vec!["--help", "extra"], vec!["--corpus=missing.txt", "--help"]] {
			let run = resolve_input(&Options::parse(args).unwrap()).unwrap();

			assert_eq!(run.titles, segment_titles(&DEFAULT_TITLES.join(" ")));
			assert!(SENTENCE_STUBS.iter().any(|stub| *stub == run.seed));
			let help = run.help.unwrap();
			assert!(help.starts_with("Usage: title-gen"));
			assert!(help.contains("|go"));
		}
	}

	#[test]
	fn corpus_file_keeps_positional_text_as_seed() {
		let path = env::temp_dir().join(format!("title-gen-cli-{}.txt", std::process::id()));
		std::fs::write(&path, "show hn my rust project\nask hn why rust\n").unwrap();

		let corpus = format!("--corpus={}", path.display());
		let run = resolve_input(&Options::parse([corpus.as_str(), "show", "hn"]).unwrap());
		std::fs::remove_file(&path).unwrap();

		let run = run.unwrap();
		assert_eq!(run.titles, vec!["show hn my rust project", "ask hn why rust"]);
		assert_eq!(run.seed, "show hn");
		assert!(run.help.is_none());
	}

	#[test]
	fn missing_corpus_file_is_an_error() {
		let options = Options::parse(["--corpus=/definitely/not/here.txt", "go"]).unwrap();
		assert!(resolve_input(&options).is_err());
	}

	#[test]
	fn model_dump_lists_every_context() {
		let generator = Generator::train(["go down joe!"]);
		let json: serde_json::Value = serde_json::from_str(&model_json(&generator).unwrap()).unwrap();

		let entries = json.as_array().unwrap();
		assert_eq!(entries.len(), 3);
		assert_eq!(entries[0]["context"]["last"], serde_json::Value::Null);
		assert_eq!(entries[0]["continuations"][0], "go");
	}
}
