//! Mock movie catalog for testing.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, GenreMap, MovieCatalog, RawMovie};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone)]
pub enum RecordedQuery {
    Search { params: BTreeMap<String, String> },
    Discover { params: BTreeMap<String, String> },
    Person { name: String },
    Genres,
}

/// Mock implementation of the MovieCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable search/discover results
/// - Resolve registered person names
/// - Track queries for assertions
/// - Simulate primary and sub-call failures
#[derive(Debug)]
pub struct MockMovieCatalog {
    /// Results returned by `search_movies`.
    search_results: Arc<RwLock<Vec<RawMovie>>>,
    /// Results returned by `discover_movies`.
    discover_results: Arc<RwLock<Vec<RawMovie>>>,
    /// Known people, lower-cased name to id.
    people: Arc<RwLock<HashMap<String, u64>>>,
    /// Genre listing.
    genres: Arc<RwLock<GenreMap>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next primary (search/discover) call fails with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
    /// When true, every `movie_genres` call fails.
    genres_error: Arc<RwLock<bool>>,
    /// When true, every `search_person` call fails.
    person_error: Arc<RwLock<bool>>,
    image_base_url: String,
}

impl Default for MockMovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            search_results: Arc::new(RwLock::new(Vec::new())),
            discover_results: Arc::new(RwLock::new(Vec::new())),
            people: Arc::new(RwLock::new(HashMap::new())),
            genres: Arc::new(RwLock::new(GenreMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            genres_error: Arc::new(RwLock::new(false)),
            person_error: Arc::new(RwLock::new(false)),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
        }
    }

    /// Set the results of the next search calls.
    pub async fn set_search_results(&self, movies: Vec<RawMovie>) {
        *self.search_results.write().await = movies;
    }

    /// Set the results of the next discover calls.
    pub async fn set_discover_results(&self, movies: Vec<RawMovie>) {
        *self.discover_results.write().await = movies;
    }

    /// Register a resolvable person.
    pub async fn add_person(&self, name: &str, id: u64) {
        self.people.write().await.insert(name.to_lowercase(), id);
    }

    /// Set the genre listing.
    pub async fn set_genres(&self, genres: GenreMap) {
        *self.genres.write().await = genres;
    }

    /// Configure the next primary call to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make all genre-listing calls fail.
    pub async fn set_genres_error(&self, fail: bool) {
        *self.genres_error.write().await = fail;
    }

    /// Make all person-search calls fail.
    pub async fn set_person_error(&self, fail: bool) {
        *self.person_error.write().await = fail;
    }

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Take the pending primary error if set.
    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, query: RecordedQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl MovieCatalog for MockMovieCatalog {
    async fn search_movies(
        &self,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<RawMovie>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::Search {
            params: params.clone(),
        })
        .await;

        Ok(self.search_results.read().await.clone())
    }

    async fn discover_movies(
        &self,
        params: &BTreeMap<String, String>,
    ) -> Result<Vec<RawMovie>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::Discover {
            params: params.clone(),
        })
        .await;

        Ok(self.discover_results.read().await.clone())
    }

    async fn search_person(&self, name: &str) -> Result<Option<u64>, CatalogError> {
        if *self.person_error.read().await {
            return Err(CatalogError::Api {
                status: 500,
                message: "person search unavailable".to_string(),
            });
        }

        self.record(RecordedQuery::Person {
            name: name.to_string(),
        })
        .await;

        Ok(self.people.read().await.get(&name.to_lowercase()).copied())
    }

    async fn movie_genres(&self) -> Result<GenreMap, CatalogError> {
        if *self.genres_error.read().await {
            return Err(CatalogError::Api {
                status: 500,
                message: "genre listing unavailable".to_string(),
            });
        }

        self.record(RecordedQuery::Genres).await;

        Ok(self.genres.read().await.clone())
    }

    fn image_base_url(&self) -> &str {
        &self.image_base_url
    }
}
