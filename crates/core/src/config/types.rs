use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::catalog::TmdbConfig;
use crate::translator::LlmConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM translation backend. Optional: without it every query goes
    /// through the rule-based path.
    #[serde(default)]
    pub llm: Option<LlmConfig>,
    /// TMDB credentials. Optional at load time; checked per request.
    #[serde(default)]
    pub tmdb: Option<TmdbConfig>,
}

impl Config {
    /// True when a TMDB credential is present.
    pub fn tmdb_configured(&self) -> bool {
        self.tmdb.as_ref().is_some_and(|t| !t.api_key.is_empty())
    }

    /// True when an LLM credential is present.
    pub fn llm_configured(&self) -> bool {
        self.llm.as_ref().is_some_and(|l| l.is_configured())
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    3000
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<SanitizedLlmConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<SanitizedTmdbConfig>,
}

/// Sanitized LLM config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedLlmConfig {
    pub model: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

/// Sanitized TMDB config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTmdbConfig {
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            llm: config.llm.as_ref().map(|l| SanitizedLlmConfig {
                model: l.model.clone(),
                api_key_configured: l.is_configured(),
                timeout_secs: l.timeout_secs,
            }),
            tmdb: config.tmdb.as_ref().map(|t| SanitizedTmdbConfig {
                api_key_configured: !t.api_key.is_empty(),
                base_url: t.base_url.clone(),
            }),
        }
    }
}
