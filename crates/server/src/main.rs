use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinequery_core::{load_config, validate_config, MovieCatalog, TmdbClient, Translator};

use cinequery_server::api::create_router;
use cinequery_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("CINEQUERY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration loaded successfully");

    // Create the TMDB client if a credential is present. Absence is not
    // fatal here: the search endpoint reports it per request instead.
    let catalog: Option<Arc<dyn MovieCatalog>> = match &config.tmdb {
        Some(tmdb_cfg) if !tmdb_cfg.api_key.is_empty() => {
            info!("Initializing TMDB client");
            match TmdbClient::new(tmdb_cfg.clone()) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    error!("Failed to create TMDB client: {}", e);
                    None
                }
            }
        }
        _ => {
            info!("TMDB not configured");
            None
        }
    };

    // Build the translator chain from config.
    let translator = Arc::new(Translator::from_config(config.llm.as_ref()));
    if translator.has_llm() {
        info!(
            "Translator chain: llm ({}) -> rules",
            config.llm.as_ref().map(|l| l.model.as_str()).unwrap_or("")
        );
    } else {
        info!("Translator chain: rules only (no LLM credential)");
    }

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), translator, catalog));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
