//! Shared types for intent translation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upstream query mode the intent dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Filter-based discovery (genre, year, rating, cast/crew).
    Discover,
    /// Free-text title search.
    Search,
}

/// Parameter names the translator is allowed to emit.
///
/// Anything outside this vocabulary coming back from the model is ignored.
pub const PARAM_VOCABULARY: &[&str] = &[
    "with_genres",
    "primary_release_year",
    "vote_average.gte",
    "with_cast",
    "with_crew",
    "sort_by",
    "query",
];

/// A fully resolved search intent.
///
/// Built once per request by the translator and consumed exactly once by the
/// executor. Never partial: `search_type` is always set and `params` always
/// present (possibly empty for a bare discover).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIntent {
    pub search_type: SearchType,
    pub params: BTreeMap<String, String>,
}

impl SearchIntent {
    /// A discover intent with the given filter params.
    pub fn discover(params: BTreeMap<String, String>) -> Self {
        Self {
            search_type: SearchType::Discover,
            params,
        }
    }

    /// A title-search intent for the given query text.
    pub fn search(query: impl Into<String>) -> Self {
        let mut params = BTreeMap::new();
        params.insert("query".to_string(), query.into());
        Self {
            search_type: SearchType::Search,
            params,
        }
    }

    /// The intent of last resort: popular, reasonably well-voted movies.
    pub fn default_discover() -> Self {
        let mut params = BTreeMap::new();
        params.insert("sort_by".to_string(), "popularity.desc".to_string());
        params.insert("vote_count.gte".to_string(), "200".to_string());
        Self {
            search_type: SearchType::Discover,
            params,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Outcome of a translation, with the method that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub intent: SearchIntent,
    /// Builder that produced the intent: "llm" or "rules".
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_serialization() {
        assert_eq!(
            serde_json::to_string(&SearchType::Discover).unwrap(),
            "\"discover\""
        );
        assert_eq!(
            serde_json::to_string(&SearchType::Search).unwrap(),
            "\"search\""
        );
    }

    #[test]
    fn test_search_intent_roundtrip() {
        let mut params = BTreeMap::new();
        params.insert("with_genres".to_string(), "28".to_string());
        let intent = SearchIntent::discover(params);

        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("\"search_type\":\"discover\""));

        let parsed: SearchIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, intent);
    }

    #[test]
    fn test_search_constructor() {
        let intent = SearchIntent::search("the dark knight");
        assert_eq!(intent.search_type, SearchType::Search);
        assert_eq!(intent.param("query"), Some("the dark knight"));
    }

    #[test]
    fn test_default_discover() {
        let intent = SearchIntent::default_discover();
        assert_eq!(intent.search_type, SearchType::Discover);
        assert_eq!(intent.param("sort_by"), Some("popularity.desc"));
        assert_eq!(intent.param("vote_count.gte"), Some("200"));
    }
}
