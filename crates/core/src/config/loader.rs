use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides.
///
/// A missing file is not an error: the service can run entirely from
/// `CINEQUERY_`-prefixed environment variables (nested keys use `__`,
/// e.g. `CINEQUERY_TMDB__API_KEY`).
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let mut figment = Figment::new();
    if path.exists() {
        figment = figment.merge(Toml::file(path));
    }

    let mut config: Config = figment
        .merge(Env::prefixed("CINEQUERY_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    resolve_secrets(&mut config);
    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    let mut config: Config =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    resolve_secrets(&mut config);
    Ok(config)
}

static ENV_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\{([A-Za-z_][A-Za-z0-9_]*)\}$").expect("env ref pattern"));

/// Resolve `${ENV_VAR}` indirections in credential fields.
///
/// An unset variable leaves the credential empty, which downstream checks
/// treat as "not configured" rather than a hard error.
fn resolve_secrets(config: &mut Config) {
    if let Some(llm) = &mut config.llm {
        if let Some(key) = &llm.api_key {
            llm.api_key = expand_env(key).filter(|k| !k.is_empty());
        }
    }
    if let Some(tmdb) = &mut config.tmdb {
        tmdb.api_key = expand_env(&tmdb.api_key).unwrap_or_default();
    }
}

/// Expand a `${VAR}` reference against the process environment.
///
/// Plain values pass through unchanged; an unresolvable reference yields
/// `None`.
fn expand_env(value: &str) -> Option<String> {
    match ENV_REF.captures(value) {
        Some(caps) => std::env::var(&caps[1]).ok(),
        None => Some(value.to_string()),
    }
}
