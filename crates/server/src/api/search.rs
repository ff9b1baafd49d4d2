//! The search endpoint: natural language in, enriched movie records out.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

use cinequery_core::{MovieRecord, SearchExecutor, SearchIntent, SearchType, DEFAULT_RESULT_LIMIT};

use crate::metrics::{SEARCHES_TOTAL, TRANSLATIONS_TOTAL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text description of what to find.
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The structured intent the query was translated into.
    pub search_params: SearchIntent,
    pub movies: Vec<MovieRecord>,
    pub total_count: usize,
    pub response_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn search_type_label(search_type: SearchType) -> &'static str {
    match search_type {
        SearchType::Discover => "discover",
        SearchType::Search => "search",
    }
}

/// POST /api/v1/search
///
/// Translate the query into a search intent, execute it against TMDB and
/// return enriched results. Both credentials are checked per request:
/// their absence is a request error, not a startup failure.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    if body.query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Query cannot be empty".to_string(),
            }),
        ));
    }

    if !state.llm_configured() {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "OpenRouter API key not configured".to_string(),
            }),
        ));
    }

    let Some(catalog) = state.catalog().filter(|_| state.tmdb_configured()) else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "TMDB API key not configured".to_string(),
            }),
        ));
    };

    // Translation never fails; any LLM trouble already fell back to rules.
    let translation = state.translator().translate(&body.query).await;
    TRANSLATIONS_TOTAL
        .with_label_values(&[&translation.method])
        .inc();

    let type_label = search_type_label(translation.intent.search_type);
    let executor = SearchExecutor::new(Arc::clone(catalog));

    match executor
        .execute(translation.intent.clone(), DEFAULT_RESULT_LIMIT)
        .await
    {
        Ok(movies) => {
            let response_time_ms = start.elapsed().as_millis() as u64;
            SEARCHES_TOTAL.with_label_values(&[type_label, "ok"]).inc();
            info!(
                %request_id,
                method = %translation.method,
                search_type = type_label,
                total = movies.len(),
                response_time_ms,
                "Search completed"
            );

            Ok(Json(SearchResponse {
                search_params: translation.intent,
                total_count: movies.len(),
                movies,
                response_time_ms,
            }))
        }
        Err(e) => {
            SEARCHES_TOTAL
                .with_label_values(&[type_label, "error"])
                .inc();
            error!(%request_id, "Search failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
