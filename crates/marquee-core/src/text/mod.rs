//! Text processing utilities: word splitting, name collapsing, stemming and
//! the vectorizer analyzer

mod stopwords;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

pub use stopwords::ENGLISH_STOP_WORDS;

static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter2 (Snowball English) stemmer
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

/// Upper bound on stemmer passes per token
const MAX_STEM_PASSES: usize = 8;

/// Two or more word characters
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

fn get_token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\w\w+").expect("token pattern is a valid regex"))
}

/// Split free text on whitespace. Missing text yields no words.
pub fn split_words(text: Option<&str>) -> Vec<String> {
    text.map(|t| t.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Remove every whitespace character so a multi-word name becomes one token
/// ("Science Fiction" -> "ScienceFiction").
pub fn collapse_spaces(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_stop_word(token: &str) -> bool {
    get_stop_words().contains(token)
}

/// Lowercase and stem a single token.
///
/// One Porter2 pass can leave a stem that stems again ("agreed" -> "agre"
/// -> "agr"), so the stemmer is re-applied until the token stops changing.
pub fn stem_token(token: &str) -> String {
    let stemmer = get_stemmer();
    let mut current = token.to_lowercase();
    for _ in 0..MAX_STEM_PASSES {
        let next = stemmer.stem(&current);
        if next == current.as_str() {
            break;
        }
        current = next.into_owned();
    }
    current
}

/// Stem every whitespace-separated token and rejoin with single spaces
pub fn stem_document(document: &str) -> String {
    document
        .split_whitespace()
        .map(stem_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vectorizer analyzer: lowercase, extract runs of two or more word
/// characters, drop English stop words.
pub fn analyze(document: &str) -> Vec<String> {
    let lowered = document.to_lowercase();
    get_token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}
