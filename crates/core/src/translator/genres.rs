//! Static lookup tables shared by both translation paths.
//!
//! These are process-wide constants, never written after initialization.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::HashSet;

/// TMDB movie genres, name to id.
///
/// Order matters: the rule engine scans this table top to bottom and the
/// first match wins, so multi-word names must come before their substrings
/// would ("science fiction" has no competing prefix today, but keep it that
/// way).
pub const GENRES: &[(&str, u32)] = &[
    ("action", 28),
    ("adventure", 12),
    ("animation", 16),
    ("comedy", 35),
    ("crime", 80),
    ("documentary", 99),
    ("drama", 18),
    ("family", 10751),
    ("fantasy", 14),
    ("history", 36),
    ("horror", 27),
    ("music", 10402),
    ("mystery", 9648),
    ("romance", 10749),
    ("science fiction", 878),
    ("thriller", 53),
    ("war", 10752),
    ("western", 37),
];

/// Word-boundary matchers for each genre name, compiled once.
static GENRE_PATTERNS: Lazy<Vec<(Regex, u32)>> = Lazy::new(|| {
    GENRES
        .iter()
        .map(|(name, id)| {
            let pattern = format!(r"\b{}\b", name);
            (Regex::new(&pattern).expect("genre pattern"), *id)
        })
        .collect()
});

/// Look up a genre id by exact name (case-insensitive).
pub fn genre_id(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    GENRES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, id)| *id)
}

/// Find the first genre mentioned anywhere in the (lower-cased) text.
pub fn find_genre(text: &str) -> Option<u32> {
    GENRE_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, id)| *id)
}

/// Words carrying no search signal, filtered out of keyword extraction.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "movies", "films", "movie", "film",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
