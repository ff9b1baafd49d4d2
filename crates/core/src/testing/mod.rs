//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external service
//! traits, allowing the full pipeline to be tested without real
//! infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use cinequery_core::testing::{MockMovieCatalog, MockLlmClient, fixtures};
//!
//! let catalog = MockMovieCatalog::new();
//! catalog.set_search_results(vec![fixtures::raw_movie(603, "The Matrix")]).await;
//! catalog.add_person("tom hanks", 31).await;
//!
//! // Use in a SearchExecutor or AppState...
//! ```

mod mock_catalog;
mod mock_llm;

pub use mock_catalog::{MockMovieCatalog, RecordedQuery};
pub use mock_llm::MockLlmClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::RawMovie;

    /// Create a raw movie with reasonable defaults.
    pub fn raw_movie(id: u64, title: &str) -> RawMovie {
        RawMovie {
            id,
            title: title.to_string(),
            original_title: Some(title.to_string()),
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            release_date: Some("1999-06-15".to_string()),
            vote_average: 7.25,
            vote_count: 1200,
            popularity: 42.5,
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            genre_ids: vec![28, 878],
            adult: false,
            original_language: "en".to_string(),
        }
    }
}
