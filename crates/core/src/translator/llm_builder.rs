//! LLM-powered intent builder.
//!
//! Prompts a language model with a constrained line-oriented schema and
//! scans the reply permissively. Any structural deviation is a total
//! failure and the coordinator falls back to the rule-based builder.
//! Partial output is never accepted.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::translator::genres::{genre_id, GENRES};
use crate::translator::llm::{CompletionRequest, LlmClient};
use crate::translator::traits::{IntentBuilder, TranslatorError};
use crate::translator::types::{SearchIntent, SearchType, PARAM_VOCABULARY};

/// Configuration for the LLM intent builder.
#[derive(Debug, Clone)]
pub struct LlmIntentBuilderConfig {
    /// Maximum tokens for the LLM response.
    pub max_tokens: u32,
    /// Temperature for generation.
    pub temperature: f32,
}

impl Default for LlmIntentBuilderConfig {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 0.3,
        }
    }
}

static TYPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)type\s*[:=]\s*(discover|search)").expect("type pattern"));

static PARAM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)([A-Za-z_][A-Za-z_.]*)\s*=\s*([^\r\n]+)").expect("param pattern")
});

/// LLM-powered intent builder.
///
/// Generic over the LLM client type to support different backends
/// (OpenRouter in production, a mock in tests).
pub struct LlmIntentBuilder<C: LlmClient> {
    client: Arc<C>,
    config: LlmIntentBuilderConfig,
}

impl<C: LlmClient> LlmIntentBuilder<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            config: LlmIntentBuilderConfig::default(),
        }
    }

    pub fn with_config(client: Arc<C>, config: LlmIntentBuilderConfig) -> Self {
        Self { client, config }
    }

    /// Build the system prompt: schema description plus the genre legend.
    fn build_system_prompt(&self) -> String {
        let legend = GENRES
            .iter()
            .map(|(name, id)| format!("{}={}", name, id))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"You convert natural language movie search requests into structured parameters for The Movie Database (TMDB).

Respond using exactly this line-oriented format and nothing else:

type: discover
param <name>=<value>

or, for a specific title lookup:

type: search
param query=<title text>

Allowed param names:
- with_genres: numeric TMDB genre id
- primary_release_year: four digit year
- vote_average.gte: minimum rating on a 0-10 scale
- with_cast: actor name
- with_crew: director or other crew member name
- sort_by: result ordering, e.g. popularity.desc or vote_average.desc
- query: free text title (only with type: search)

Use type: search only when the user names a specific movie; otherwise use type: discover with filter params. Emit one param per line and only params that the request supports.

Genre ids: {legend}"#
        )
    }

    /// Scan the model reply for the declared type and `name=value` pairs.
    ///
    /// Tolerant about surrounding prose and unknown keys, strict about the
    /// essentials: no valid type line or no usable params means failure.
    fn parse_response(&self, text: &str) -> Result<SearchIntent, TranslatorError> {
        let search_type = match TYPE_PATTERN.captures(text) {
            Some(caps) => match caps[1].to_lowercase().as_str() {
                "discover" => SearchType::Discover,
                _ => SearchType::Search,
            },
            None => {
                return Err(TranslatorError::Unparseable(format!(
                    "no type line in: {}",
                    text.trim()
                )))
            }
        };

        let mut params = BTreeMap::new();
        for caps in PARAM_PATTERN.captures_iter(text) {
            let key = caps[1].to_lowercase();
            if !PARAM_VOCABULARY.contains(&key.as_str()) {
                continue;
            }
            let value = caps[2].trim().trim_matches(['"', '\'', '`']).to_string();
            if !value.is_empty() {
                params.insert(key, value);
            }
        }

        if params.is_empty() {
            return Err(TranslatorError::Unparseable(format!(
                "no recognized params in: {}",
                text.trim()
            )));
        }
        if search_type == SearchType::Search && !params.contains_key("query") {
            return Err(TranslatorError::Unparseable(
                "search type without a query param".to_string(),
            ));
        }

        let mut intent = SearchIntent {
            search_type,
            params,
        };
        self.resolve_genre_names(&mut intent);
        Ok(intent)
    }

    /// Rewrite a genre *name* in `with_genres` to its numeric id.
    ///
    /// An unresolvable name is dropped rather than passed upstream, matching
    /// how unresolvable person names are handled at dispatch time.
    fn resolve_genre_names(&self, intent: &mut SearchIntent) {
        let Some(value) = intent.params.get("with_genres") else {
            return;
        };
        if value.chars().all(|c| c.is_ascii_digit()) && !value.is_empty() {
            return;
        }
        match genre_id(value) {
            Some(id) => {
                intent
                    .params
                    .insert("with_genres".to_string(), id.to_string());
            }
            None => {
                debug!("Dropping unresolvable genre filter: {:?}", value);
                intent.params.remove("with_genres");
            }
        }
    }
}

#[async_trait]
impl<C: LlmClient + 'static> IntentBuilder for LlmIntentBuilder<C> {
    fn name(&self) -> &str {
        "llm"
    }

    async fn build_intent(&self, query: &str) -> Result<SearchIntent, TranslatorError> {
        let request = CompletionRequest::new(format!(
            "Convert this movie search request into search parameters: {}",
            query
        ))
        .with_system(self.build_system_prompt())
        .with_max_tokens(self.config.max_tokens)
        .with_temperature(self.config.temperature);

        let response = self
            .client
            .complete(request)
            .await
            .map_err(|e| TranslatorError::Llm(e.to_string()))?;

        debug!(model = %self.client.model(), "LLM translation reply received");
        self.parse_response(&response.text)
    }
}
