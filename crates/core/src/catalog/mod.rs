//! Movie catalog integration - TMDB queries and result enrichment.
//!
//! `MovieCatalog` abstracts the four upstream calls the executor needs:
//! title search, filtered discovery, person search, and the genre listing.
//! `TmdbClient` is the production implementation; a mock lives in
//! `crate::testing`.

mod executor;
mod tmdb;
mod types;

pub use executor::{SearchExecutor, DEFAULT_RESULT_LIMIT};
pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::{format_movie, GenreMap, MovieRecord, RawMovie};

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur when querying the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for movie catalog backends.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Free-text title search.
    async fn search_movies(
        &self,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<RawMovie>, CatalogError>;

    /// Filter-based discovery.
    async fn discover_movies(
        &self,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<RawMovie>, CatalogError>;

    /// Resolve a person name to an upstream id. `None` when nobody matches.
    async fn search_person(&self, name: &str) -> Result<Option<u64>, CatalogError>;

    /// Genre id to name listing.
    async fn movie_genres(&self) -> Result<GenreMap, CatalogError>;

    /// Base URL for poster/backdrop construction.
    fn image_base_url(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Api {
            status: 503,
            message: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - upstream down");

        let err = CatalogError::NotConfigured("TMDB API key is required".to_string());
        assert!(err.to_string().contains("TMDB API key"));
    }
}
