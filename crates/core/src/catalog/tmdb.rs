//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{GenreMap, RawMovie};
use super::{CatalogError, MovieCatalog};

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    /// Can use ${ENV_VAR} syntax to read from environment.
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image base URL for posters/backdrops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    image_base_url: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        let image_base_url = config
            .image_base_url
            .unwrap_or_else(|| "https://image.tmdb.org/t/p".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            image_base_url,
        })
    }

    /// Issue a GET against a TMDB path with the given query params,
    /// mapping upstream failure statuses onto `CatalogError`.
    async fn get(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<reqwest::Response, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(CatalogError::NotConfigured(
                "Invalid TMDB API key".to_string(),
            ));
        }
        if status == 429 {
            return Err(CatalogError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(
        &self,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<RawMovie>, CatalogError> {
        debug!("TMDB movie search: params={:?}", params);

        let response = self.get("/search/movie", params).await?;
        let search_result: TmdbSearchResponse<RawMovie> = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse movie search response: {}", e))
        })?;

        Ok(search_result.results)
    }

    async fn discover_movies(
        &self,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<RawMovie>, CatalogError> {
        debug!("TMDB discover: params={:?}", params);

        let response = self.get("/discover/movie", params).await?;
        let search_result: TmdbSearchResponse<RawMovie> = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse discover response: {}", e))
        })?;

        Ok(search_result.results)
    }

    async fn search_person(&self, name: &str) -> Result<Option<u64>, CatalogError> {
        debug!("TMDB person search: name='{}'", name);

        let mut params = BTreeMap::new();
        params.insert("query".to_string(), name.to_string());
        params.insert("include_adult".to_string(), "false".to_string());
        params.insert("language".to_string(), "en-US".to_string());

        let response = self.get("/search/person", &params).await?;
        let search_result: TmdbSearchResponse<TmdbPersonResult> =
            response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse person search response: {}", e))
            })?;

        // TMDB orders person results by popularity; the first hit is the
        // best candidate for an ambiguous name.
        Ok(search_result.results.into_iter().next().map(|p| p.id))
    }

    async fn movie_genres(&self) -> Result<GenreMap, CatalogError> {
        debug!("TMDB genre listing");

        let mut params = BTreeMap::new();
        params.insert("language".to_string(), "en-US".to_string());

        let response = self.get("/genre/movie/list", &params).await?;
        let listing: TmdbGenreListResponse = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse genre list response: {}", e))
        })?;

        Ok(listing
            .genres
            .into_iter()
            .map(|g| (g.id, g.name))
            .collect())
    }

    fn image_base_url(&self) -> &str {
        &self.image_base_url
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TmdbPersonResult {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct TmdbGenreListResponse {
    #[serde(default)]
    genres: Vec<TmdbGenre>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    id: u32,
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_api_key() {
        let result = TmdbClient::new(TmdbConfig {
            api_key: String::new(),
            base_url: None,
            image_base_url: None,
        });
        assert!(matches!(result, Err(CatalogError::NotConfigured(_))));
    }

    #[test]
    fn test_client_defaults() {
        let client = TmdbClient::new(TmdbConfig {
            api_key: "test-key".to_string(),
            base_url: None,
            image_base_url: None,
        })
        .unwrap();

        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
        assert_eq!(client.image_base_url(), "https://image.tmdb.org/t/p");
    }

    #[test]
    fn test_client_custom_urls() {
        let client = TmdbClient::new(TmdbConfig {
            api_key: "test-key".to_string(),
            base_url: Some("http://localhost:9000/3".to_string()),
            image_base_url: Some("http://localhost:9000/img".to_string()),
        })
        .unwrap();

        assert_eq!(client.base_url, "http://localhost:9000/3");
        assert_eq!(client.image_base_url(), "http://localhost:9000/img");
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "vote_average": 8.2, "genre_ids": [28, 878]}
            ],
            "total_results": 1
        }"#;
        let parsed: TmdbSearchResponse<RawMovie> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].title, "The Matrix");
        assert_eq!(parsed.results[0].genre_ids, vec![28, 878]);
    }

    #[test]
    fn test_genre_list_deserialization() {
        let json = r#"{"genres": [{"id": 28, "name": "Action"}, {"id": 35, "name": "Comedy"}]}"#;
        let parsed: TmdbGenreListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.genres.len(), 2);
        assert_eq!(parsed.genres[0].name, "Action");
    }

    #[test]
    fn test_person_result_deserialization() {
        let json = r#"{"results": [{"id": 31, "name": "Tom Hanks", "popularity": 80.1}]}"#;
        let parsed: TmdbSearchResponse<TmdbPersonResult> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results[0].id, 31);
    }
}
