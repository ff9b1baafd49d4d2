//! Rule-based intent builder.
//!
//! Fully deterministic fallback for when the LLM path is unavailable or
//! produced unusable output. Works entirely offline and is total: every
//! query maps to some intent.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::BTreeMap;

use crate::translator::genres::{find_genre, is_stop_word};
use crate::translator::traits::{IntentBuilder, TranslatorError};
use crate::translator::types::SearchIntent;

/// Minimum rating applied when the query signals a quality preference.
const RATING_THRESHOLD: &str = "7.5";

/// Longest actor-name span accepted after a "starring" cue.
const MAX_CAST_WORDS: usize = 3;

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:find|movie|film)s?\b.*?\bcalled\s+(.+)").expect("title pattern")
});

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("year pattern"));

static RATING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:high|good|top)\s+rat(?:ed|ing)s?\b|\bbest\b").expect("rating pattern")
});

static CAST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bstarring\s+(.+)").expect("cast pattern"));

/// Heuristic intent builder.
///
/// Priority order:
/// 1. "find/movie/film called X" short-circuits to a title search.
/// 2. Independent genre/year/rating/cast detectors, all applied.
/// 3. Keyword extraction into a title search.
/// 4. A default popularity-sorted discover.
#[derive(Debug, Default)]
pub struct RuleIntentBuilder;

impl RuleIntentBuilder {
    pub fn new() -> Self {
        Self
    }

    /// "find movie called the dark knight" -> "the dark knight".
    fn extract_title(&self, query: &str) -> Option<String> {
        TITLE_PATTERN
            .captures(query)
            .map(|caps| caps[1].trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// The span after "starring", bounded by "in"/"from".
    ///
    /// Only accepted when short enough to plausibly be a name; anything
    /// longer is more likely the rest of the sentence.
    fn extract_cast(&self, query: &str) -> Option<String> {
        let caps = CAST_PATTERN.captures(query)?;
        let mut span = caps[1].trim();
        for bound in [" in ", " from "] {
            if let Some(pos) = span.find(bound) {
                span = span[..pos].trim();
            }
        }
        let words: Vec<&str> = span.split_whitespace().collect();
        if words.is_empty() || words.len() > MAX_CAST_WORDS {
            return None;
        }
        Some(words.join(" "))
    }

    /// Up to 3 meaningful tokens for a free-text search.
    fn extract_keywords(&self, query: &str) -> Vec<String> {
        query
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| w.len() > 3 && !is_stop_word(w))
            .take(3)
            .map(String::from)
            .collect()
    }

    fn build(&self, query: &str) -> SearchIntent {
        let query = query.to_lowercase();

        // Title phrasing wins over everything else.
        if let Some(title) = self.extract_title(&query) {
            return SearchIntent::search(title);
        }

        let mut params = BTreeMap::new();

        if let Some(genre) = find_genre(&query) {
            params.insert("with_genres".to_string(), genre.to_string());
        }
        if let Some(caps) = YEAR_PATTERN.captures(&query) {
            params.insert("primary_release_year".to_string(), caps[1].to_string());
        }
        if RATING_PATTERN.is_match(&query) {
            params.insert("vote_average.gte".to_string(), RATING_THRESHOLD.to_string());
        }
        if let Some(cast) = self.extract_cast(&query) {
            params.insert("with_cast".to_string(), cast);
        }

        if !params.is_empty() {
            return SearchIntent::discover(params);
        }

        let keywords = self.extract_keywords(&query);
        if !keywords.is_empty() {
            return SearchIntent::search(keywords.join(" "));
        }

        SearchIntent::default_discover()
    }
}

#[async_trait]
impl IntentBuilder for RuleIntentBuilder {
    fn name(&self) -> &str {
        "rules"
    }

    async fn build_intent(&self, query: &str) -> Result<SearchIntent, TranslatorError> {
        Ok(self.build(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::types::SearchType;

    fn build(query: &str) -> SearchIntent {
        RuleIntentBuilder::new().build(query)
    }

    #[test]
    fn test_genre_and_year() {
        let intent = build("action movies from 2020");
        assert_eq!(intent.search_type, SearchType::Discover);
        assert_eq!(intent.param("with_genres"), Some("28"));
        assert_eq!(intent.param("primary_release_year"), Some("2020"));
        assert_eq!(intent.params.len(), 2);
    }

    #[test]
    fn test_title_short_circuit() {
        let intent = build("find movie called The Dark Knight");
        assert_eq!(intent.search_type, SearchType::Search);
        assert_eq!(intent.param("query"), Some("the dark knight"));
        assert_eq!(intent.params.len(), 1);
    }

    #[test]
    fn test_title_beats_other_detectors() {
        // "2008" and "action" would otherwise fire.
        let intent = build("find action film called the dark knight 2008");
        assert_eq!(intent.search_type, SearchType::Search);
        assert_eq!(intent.param("query"), Some("the dark knight 2008"));
    }

    #[test]
    fn test_rating_detector() {
        let intent = build("top rated horror movies");
        assert_eq!(intent.param("with_genres"), Some("27"));
        assert_eq!(intent.param("vote_average.gte"), Some("7.5"));
    }

    #[test]
    fn test_best_cue() {
        let intent = build("best westerns");
        // "westerns" does not hit the word-boundary genre match, but "best" does fire.
        assert_eq!(intent.param("vote_average.gte"), Some("7.5"));
        assert_eq!(intent.search_type, SearchType::Discover);
    }

    #[test]
    fn test_cast_detector() {
        let intent = build("movies starring tom hanks from the 90s");
        assert_eq!(intent.param("with_cast"), Some("tom hanks"));
    }

    #[test]
    fn test_cast_bounded_by_in() {
        let intent = build("comedy starring jim carrey in 1995");
        assert_eq!(intent.param("with_cast"), Some("jim carrey"));
        assert_eq!(intent.param("with_genres"), Some("35"));
        assert_eq!(intent.param("primary_release_year"), Some("1995"));
    }

    #[test]
    fn test_cast_span_too_long_rejected() {
        let intent = build("movies starring someone I saw on television once");
        assert_eq!(intent.param("with_cast"), None);
    }

    #[test]
    fn test_detectors_are_independent() {
        let intent = build("best action movies from 1999 starring keanu reeves");
        assert_eq!(intent.param("with_genres"), Some("28"));
        assert_eq!(intent.param("primary_release_year"), Some("1999"));
        assert_eq!(intent.param("vote_average.gte"), Some("7.5"));
        assert_eq!(intent.param("with_cast"), Some("keanu reeves"));
    }

    #[test]
    fn test_keyword_fallback() {
        let intent = build("the matrix trilogy");
        assert_eq!(intent.search_type, SearchType::Search);
        assert_eq!(intent.param("query"), Some("matrix trilogy"));
    }

    #[test]
    fn test_keyword_fallback_caps_at_three() {
        let intent = build("wizard school castle dragons potions");
        let query = intent.param("query").unwrap();
        assert_eq!(query.split_whitespace().count(), 3);
    }

    #[test]
    fn test_unrecognizable_query_yields_default_discover() {
        let intent = build("xyz");
        assert_eq!(intent, SearchIntent::default_discover());
    }

    #[test]
    fn test_empty_query_yields_default_discover() {
        let intent = build("");
        assert_eq!(intent, SearchIntent::default_discover());
    }

    #[test]
    fn test_year_detector_alone() {
        let intent = build("something great released 1977");
        assert_eq!(intent.search_type, SearchType::Discover);
        assert_eq!(intent.param("primary_release_year"), Some("1977"));
    }

    #[tokio::test]
    async fn test_build_intent_never_fails() {
        let builder = RuleIntentBuilder::new();
        for query in ["", "xyz", "action movies", "find movie called up"] {
            assert!(builder.build_intent(query).await.is_ok());
        }
    }

    #[test]
    fn test_builder_name() {
        assert_eq!(RuleIntentBuilder::new().name(), "rules");
    }
}
