pub mod catalog;
pub mod config;
pub mod testing;
pub mod translator;

pub use catalog::{
    format_movie, CatalogError, GenreMap, MovieCatalog, MovieRecord, RawMovie, SearchExecutor,
    TmdbClient, TmdbConfig, DEFAULT_RESULT_LIMIT,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
pub use translator::{
    IntentBuilder, LlmClient, LlmConfig, LlmError, LlmIntentBuilder, OpenRouterClient,
    RuleIntentBuilder, SearchIntent, SearchType, Translation, Translator, TranslatorError,
};
