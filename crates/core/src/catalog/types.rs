//! Movie catalog domain types and result enrichment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Genre id to display name, fetched per search and discarded afterwards.
pub type GenreMap = HashMap<u32, String>;

/// A raw movie object as returned by the upstream list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub original_language: String,
}

/// An enriched movie record, ready for clients.
///
/// Derived deterministically from one `RawMovie` plus a `GenreMap`; carries
/// no identity beyond the upstream id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: String,
    pub release_date: String,
    /// Rounded to one decimal place.
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<u32>,
    pub genre_names: Vec<String>,
    pub adult: bool,
    pub original_language: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
}

/// Turn a raw upstream movie into an enriched record.
///
/// Genre ids without a map entry are skipped in `genre_names` (but kept in
/// `genre_ids`); image URLs are built only when the path is present.
pub fn format_movie(movie: &RawMovie, genre_map: &GenreMap, image_base_url: &str) -> MovieRecord {
    let genre_names = movie
        .genre_ids
        .iter()
        .filter_map(|id| genre_map.get(id).cloned())
        .collect();

    let title = if movie.title.is_empty() {
        "Unknown Title".to_string()
    } else {
        movie.title.clone()
    };

    MovieRecord {
        id: movie.id,
        title,
        original_title: movie.original_title.clone(),
        overview: movie.overview.clone().unwrap_or_default(),
        release_date: movie.release_date.clone().unwrap_or_default(),
        vote_average: (movie.vote_average * 10.0).round() / 10.0,
        vote_count: movie.vote_count,
        popularity: movie.popularity,
        poster_path: movie.poster_path.clone(),
        backdrop_path: movie.backdrop_path.clone(),
        genre_ids: movie.genre_ids.clone(),
        genre_names,
        adult: movie.adult,
        original_language: movie.original_language.clone(),
        poster_url: movie
            .poster_path
            .as_ref()
            .map(|p| format!("{}/w500{}", image_base_url, p)),
        backdrop_url: movie
            .backdrop_path
            .as_ref()
            .map(|p| format!("{}/w1280{}", image_base_url, p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

    fn raw_movie() -> RawMovie {
        RawMovie {
            id: 603,
            title: "The Matrix".to_string(),
            original_title: Some("The Matrix".to_string()),
            overview: Some("A computer hacker...".to_string()),
            release_date: Some("1999-03-30".to_string()),
            vote_average: 8.22,
            vote_count: 25000,
            popularity: 85.3,
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            genre_ids: vec![28, 878],
            adult: false,
            original_language: "en".to_string(),
        }
    }

    fn genre_map() -> GenreMap {
        let mut map = GenreMap::new();
        map.insert(28, "Action".to_string());
        map.insert(878, "Science Fiction".to_string());
        map
    }

    #[test]
    fn test_format_movie() {
        let record = format_movie(&raw_movie(), &genre_map(), IMAGE_BASE);

        assert_eq!(record.id, 603);
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.vote_average, 8.2);
        assert_eq!(record.genre_names, vec!["Action", "Science Fiction"]);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(record.backdrop_url, None);
    }

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        let mut movie = raw_movie();
        movie.vote_average = 7.849999;
        let record = format_movie(&movie, &GenreMap::new(), IMAGE_BASE);
        assert_eq!(record.vote_average, 7.8);

        movie.vote_average = 7.85;
        let record = format_movie(&movie, &GenreMap::new(), IMAGE_BASE);
        assert_eq!(record.vote_average, 7.9);
    }

    #[test]
    fn test_missing_image_paths_yield_no_urls() {
        let mut movie = raw_movie();
        movie.poster_path = None;
        movie.backdrop_path = None;

        let record = format_movie(&movie, &genre_map(), IMAGE_BASE);
        assert_eq!(record.poster_url, None);
        assert_eq!(record.backdrop_url, None);
    }

    #[test]
    fn test_unknown_genre_ids_skipped_in_names() {
        let mut movie = raw_movie();
        movie.genre_ids = vec![28, 12345];

        let record = format_movie(&movie, &genre_map(), IMAGE_BASE);
        assert_eq!(record.genre_ids, vec![28, 12345]);
        assert_eq!(record.genre_names, vec!["Action"]);
    }

    #[test]
    fn test_empty_genre_map_leaves_names_blank() {
        let record = format_movie(&raw_movie(), &GenreMap::new(), IMAGE_BASE);
        assert!(record.genre_names.is_empty());
        assert_eq!(record.genre_ids, vec![28, 878]);
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let movie = raw_movie();
        let map = genre_map();
        let first = format_movie(&movie, &map, IMAGE_BASE);
        let second = format_movie(&movie, &map, IMAGE_BASE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_title_fallback() {
        let mut movie = raw_movie();
        movie.title = String::new();
        let record = format_movie(&movie, &genre_map(), IMAGE_BASE);
        assert_eq!(record.title, "Unknown Title");
    }

    #[test]
    fn test_raw_movie_deserialization_with_missing_fields() {
        let json = r#"{"id": 42, "title": "Sparse"}"#;
        let movie: RawMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.vote_average, 0.0);
        assert!(movie.genre_ids.is_empty());
        assert!(!movie.adult);
    }
}
