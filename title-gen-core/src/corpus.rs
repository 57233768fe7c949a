use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use regex::Regex;

/// Separates the corpus from the seed phrase in a raw input.
pub const SEED_DELIMITER: char = '|';

/// Built-in demonstration corpus.
pub const DEFAULT_TITLES: [&str; 12] = [
	"hey ben what time does bob get here?",
	"neighbor joe bob. don't go there joe!",
	"hey, hi what's that sound?",
	"everbody knows what's going down.",
	"hi-de-ho there neighbor.",
	"go down joe!",
	"go up mike!",
	"down town!",
	"go up and down the hill.",
	"bob don't go there neighbor.",
	"joe what's going here?",
	"go does bob get that sound?",
];

/// Seeds picked from when no seed is supplied.
pub const SENTENCE_STUBS: &[&str] = &["go"];

/// Sentence-ending punctuation followed by whitespace.
// Should not panic, the pattern is constant
static TITLE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.?!])\s+").unwrap());

/// Builds the demonstration input: every default title, then a random stub.
///
/// Example: `"hey ben what time does bob get here? ... sound?|go"`
pub fn default_input() -> String {
	let stub = SENTENCE_STUBS.choose(&mut rand::rng()).copied().unwrap_or_default();
	format!("{}{}{}", DEFAULT_TITLES.join(" "), SEED_DELIMITER, stub)
}

/// Splits a raw input into its corpus and seed parts.
///
/// - `"<titles>|<seed>"` → `("<titles>", "<seed>")`
/// - Without delimiter the seed is empty
/// - Any field after the seed is ignored
pub fn split_input(input: &str) -> (&str, &str) {
	let mut fields = input.split(SEED_DELIMITER);
	let corpus = fields.next().unwrap_or_default();
	let seed = fields.next().unwrap_or_default();
	(corpus, seed)
}

/// Splits a corpus into titles.
///
/// A title ends with `.`, `?` or `!` followed by whitespace. The punctuation
/// stays attached to its title. Trailing text without punctuation forms a
/// last title; blank segments are dropped.
///
/// Example:
/// `"go down joe! down town!"` → `["go down joe!", "down town!"]`
pub fn segment_titles(corpus: &str) -> Vec<String> {
	let mut titles = Vec::new();
	let mut start = 0;

	for delimiter in TITLE_DELIMITER.captures_iter(corpus) {
		let (Some(whole), Some(punctuation)) = (delimiter.get(0), delimiter.get(1)) else {
			continue;
		};
		push_title(&mut titles, &corpus[start..punctuation.end()]);
		start = whole.end();
	}
	push_title(&mut titles, &corpus[start..]);

	titles
}

fn push_title(titles: &mut Vec<String>, segment: &str) {
	let title = segment.trim();
	if !title.is_empty() {
		titles.push(title.to_owned());
	}
}

/// Reads titles from a text file.
///
/// - Reads the entire file into memory
/// - Each line holds one or more titles, segmented on its own
/// - A title never spans a line break; blank lines are skipped
pub fn read_titles<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().flat_map(segment_titles).collect())
}
