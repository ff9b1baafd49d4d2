//! Traits for translator components.

use async_trait::async_trait;
use thiserror::Error;

use crate::translator::types::SearchIntent;

/// Errors that can occur while building an intent.
///
/// These never escape the translator: any error from one builder sends the
/// coordinator on to the next alternative in the chain.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Unparseable model output: {0}")]
    Unparseable(String),

    #[error("LLM not configured")]
    NotConfigured,
}

/// Trait for building a search intent from a natural language query.
///
/// Implementations can use an LLM or deterministic heuristics.
#[async_trait]
pub trait IntentBuilder: Send + Sync {
    /// Name of this builder for logging/metrics.
    fn name(&self) -> &str;

    /// Build a complete search intent from the raw query text.
    ///
    /// Must return a whole intent or an error, never a partial result.
    async fn build_intent(&self, query: &str) -> Result<SearchIntent, TranslatorError>;
}
