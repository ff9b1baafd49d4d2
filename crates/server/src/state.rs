use std::sync::Arc;

use cinequery_core::{Config, MovieCatalog, SanitizedConfig, Translator};

/// Shared application state
pub struct AppState {
    config: Config,
    translator: Arc<Translator>,
    catalog: Option<Arc<dyn MovieCatalog>>,
}

impl AppState {
    pub fn new(
        config: Config,
        translator: Arc<Translator>,
        catalog: Option<Arc<dyn MovieCatalog>>,
    ) -> Self {
        Self {
            config,
            translator,
            catalog,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn catalog(&self) -> Option<&Arc<dyn MovieCatalog>> {
        self.catalog.as_ref()
    }

    /// Credential presence, checked per request by the search handler.
    pub fn tmdb_configured(&self) -> bool {
        self.config.tmdb_configured() && self.catalog.is_some()
    }

    pub fn llm_configured(&self) -> bool {
        self.config.llm_configured()
    }
}
