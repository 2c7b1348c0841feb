// Keyword extraction for overlap scoring.
//
// Deliberately small: split on Unicode whitespace and light punctuation,
// drop short tokens and stop words, keep the first few survivors in the
// order they appeared. No stemming, no dedup, no ranking. Callers lowercase first.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Upper bound on keywords taken from one text.
pub const MAX_KEYWORDS: usize = 10;

/// Tokens must be longer than this (in characters) to count.
const MIN_TOKEN_CHARS: usize = 2;

/// Common English function words plus the filler verbs QA titles start with.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "him", "his", "how", "its", "may", "new", "now", "see", "who",
    "did", "get", "let", "put", "say", "she", "too", "use", "with", "from", "have", "been",
    "were", "they", "will", "would", "could", "should", "there", "their", "what", "when",
    "where", "which", "while", "into", "than", "then", "them", "also", "only", "such", "some",
    "each", "about", "after", "before", "over", "under", "shall", "must", "being", "does",
    "test", "verify", "check", "ensure", "that", "this", "these", "those",
];

// regex-lite's `\s` is ASCII-only; Unicode spaces are split first by
// `is_separator`.
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s,.;:!?()\[\]{}'"]+"#).expect("valid delimiter pattern"));

/// Unicode whitespace plus the byte-order mark pasted text often carries.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract up to [`MAX_KEYWORDS`] significant tokens from already-lowercased text.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split(is_separator)
        .flat_map(|chunk| DELIMITERS.split(chunk))
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS && !is_stop_word(token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Keywords of `search` that also occur among `target`'s keywords, in
/// `search` order. Repeats in `search` are kept.
pub fn shared_keywords(search: &[String], target: &[String]) -> Vec<String> {
    search
        .iter()
        .filter(|kw| target.contains(kw))
        .cloned()
        .collect()
}
