//! Search executor - dispatches a search intent against the movie catalog.
//!
//! Stateless per call: no retries, no caching. The primary search/discover
//! failure propagates to the caller; the genre-listing and person-lookup
//! sub-calls degrade gracefully instead.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

use crate::catalog::types::{format_movie, GenreMap, MovieRecord};
use crate::catalog::{CatalogError, MovieCatalog};
use crate::translator::{SearchIntent, SearchType};

/// Fixed cap on returned results.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Executes search intents against a movie catalog and enriches the results.
pub struct SearchExecutor {
    catalog: Arc<dyn MovieCatalog>,
}

impl SearchExecutor {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// Run the intent and return up to `limit` enriched records in
    /// upstream-provided order.
    pub async fn execute(
        &self,
        intent: SearchIntent,
        limit: usize,
    ) -> Result<Vec<MovieRecord>, CatalogError> {
        let mut params: BTreeMap<String, String> = BTreeMap::from([
            ("include_adult".to_string(), "false".to_string()),
            ("language".to_string(), "en-US".to_string()),
            ("page".to_string(), "1".to_string()),
        ]);
        params.extend(intent.params);

        let raw = match intent.search_type {
            SearchType::Discover => {
                self.resolve_person(&mut params, "with_cast").await;
                self.resolve_person(&mut params, "with_crew").await;
                params
                    .entry("sort_by".to_string())
                    .or_insert_with(|| "popularity.desc".to_string());
                self.catalog.discover_movies(&params).await?
            }
            SearchType::Search => self.catalog.search_movies(&params).await?,
        };

        // Best effort: a failed genre listing leaves names blank rather
        // than failing the whole search.
        let genre_map = match self.catalog.movie_genres().await {
            Ok(map) => map,
            Err(e) => {
                warn!("Genre listing failed, returning results without genre names: {}", e);
                GenreMap::new()
            }
        };

        let image_base = self.catalog.image_base_url();
        Ok(raw
            .iter()
            .take(limit)
            .map(|movie| format_movie(movie, &genre_map, image_base))
            .collect())
    }

    /// Replace a person *name* param with the upstream id.
    ///
    /// Numeric values pass through untouched. A name nobody matches - or a
    /// failed lookup - drops the filter instead of sending an unresolvable
    /// name upstream.
    async fn resolve_person(&self, params: &mut BTreeMap<String, String>, key: &str) {
        let Some(value) = params.get(key).cloned() else {
            return;
        };
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            return;
        }

        match self.catalog.search_person(&value).await {
            Ok(Some(id)) => {
                params.insert(key.to_string(), id.to_string());
            }
            Ok(None) => {
                warn!("No person match for {}={:?}, dropping filter", key, value);
                params.remove(key);
            }
            Err(e) => {
                warn!("Person lookup for {}={:?} failed, dropping filter: {}", key, value, e);
                params.remove(key);
            }
        }
    }
}
