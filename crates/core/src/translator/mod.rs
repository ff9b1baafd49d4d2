//! Intent translation - natural language to structured search intent.
//!
//! The translator is an ordered fallback chain:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                    Translator                     │
//! │                                                   │
//! │  ┌────────────────────────────────────────────┐  │
//! │  │              IntentBuilder Trait            │  │
//! │  │  ┌──────────────────┐  ┌─────────────────┐ │  │
//! │  │  │ LlmIntentBuilder │  │RuleIntentBuilder│ │  │
//! │  │  └──────────────────┘  └─────────────────┘ │  │
//! │  └────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The LLM builder (when a credential is configured) is tried first; any
//! failure - transport, non-2xx, unparseable output - falls through to the
//! deterministic rule builder, which always produces an intent. The chain
//! as a whole never fails.

mod config;
mod coordinator;
mod genres;
mod llm;
mod llm_builder;
mod rules;
mod traits;
mod types;

// LLM client types
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage, OpenRouterClient};

// Configuration types
pub use config::LlmConfig;

// Core traits
pub use traits::{IntentBuilder, TranslatorError};

// Builders
pub use llm_builder::{LlmIntentBuilder, LlmIntentBuilderConfig};
pub use rules::RuleIntentBuilder;

// Static tables
pub use genres::{find_genre, genre_id, is_stop_word, GENRES};

// Intent types
pub use types::{SearchIntent, SearchType, Translation, PARAM_VOCABULARY};

// The coordinator
pub use coordinator::Translator;
