//! Translator coordinator - ordered fallback chain over intent builders.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::translator::config::LlmConfig;
use crate::translator::llm::OpenRouterClient;
use crate::translator::llm_builder::{LlmIntentBuilder, LlmIntentBuilderConfig};
use crate::translator::rules::RuleIntentBuilder;
use crate::translator::traits::IntentBuilder;
use crate::translator::types::{SearchIntent, Translation};

/// Natural language to search intent translator.
///
/// Holds an ordered list of builders and returns the first success. The
/// rule-based builder at the end of the chain is total, so `translate`
/// never fails outward.
pub struct Translator {
    builders: Vec<Arc<dyn IntentBuilder>>,
}

impl Translator {
    /// A rule-only translator (no LLM).
    pub fn new() -> Self {
        Self {
            builders: vec![Arc::new(RuleIntentBuilder::new())],
        }
    }

    /// Build the chain from configuration.
    ///
    /// With a usable credential the chain is LLM first, rules second;
    /// otherwise the LLM path is skipped entirely.
    pub fn from_config(llm: Option<&LlmConfig>) -> Self {
        let mut builders: Vec<Arc<dyn IntentBuilder>> = Vec::with_capacity(2);

        if let Some(cfg) = llm.filter(|c| c.is_configured()) {
            let api_key = cfg.api_key.clone().unwrap_or_default();
            let mut client = OpenRouterClient::with_timeout(
                api_key,
                cfg.model.clone(),
                Duration::from_secs(cfg.timeout_secs as u64),
            );
            if let Some(base) = &cfg.api_base {
                client = client.with_api_base(base.clone());
            }
            builders.push(Arc::new(LlmIntentBuilder::with_config(
                Arc::new(client),
                LlmIntentBuilderConfig {
                    max_tokens: cfg.max_tokens,
                    temperature: cfg.temperature,
                },
            )));
        }

        builders.push(Arc::new(RuleIntentBuilder::new()));
        Self { builders }
    }

    /// Custom chain, mostly for tests.
    pub fn with_builders(builders: Vec<Arc<dyn IntentBuilder>>) -> Self {
        Self { builders }
    }

    /// True when an LLM builder sits at the front of the chain.
    pub fn has_llm(&self) -> bool {
        self.builders.len() > 1
    }

    /// Translate a natural language query into a search intent.
    ///
    /// First builder to succeed wins; failures are logged and absorbed.
    pub async fn translate(&self, query: &str) -> Translation {
        for builder in &self.builders {
            match builder.build_intent(query).await {
                Ok(intent) => {
                    debug!(method = builder.name(), "Query translated");
                    return Translation {
                        intent,
                        method: builder.name().to_string(),
                    };
                }
                Err(e) => {
                    warn!(method = builder.name(), "Intent builder failed: {}", e);
                }
            }
        }

        // Unreachable with the standard chain; kept total regardless.
        Translation {
            intent: SearchIntent::default_discover(),
            method: "default".to_string(),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
