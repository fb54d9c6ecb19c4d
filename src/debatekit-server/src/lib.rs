//! DebateKit HTTP server.
//!
//! Maps the JSON API onto [`DebateCoach`] and serves it with axum.

pub mod error;
pub mod routes;

use std::error::Error;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, request::Parts},
    routing::{get, post},
};
use debatekit_core::{Config, DebateCoach, new_client};
use log::{error, info};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<DebateCoach>,
    pub allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(coach: DebateCoach, allowed_origins: Vec<String>) -> Self {
        Self {
            coach: Arc::new(coach),
            allowed_origins: Arc::new(allowed_origins),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let origins = state.allowed_origins.clone();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| origin_allowed(o, &origins))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/generate", post(routes::generate))
        .route("/api/chat", post(routes::chat))
        .route("/api/po-assist", post(routes::po_assist))
        .layer(cors)
        .with_state(state)
}

/// Match an origin against the allow-list.
///
/// Entries are exact origins, or `scheme://*.domain` which admits any
/// subdomain of `domain` under that scheme.
pub fn origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|pattern| match pattern.split_once("://*.") {
        Some((scheme, domain)) => origin
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix("://"))
            .and_then(|host| host.strip_suffix(domain))
            .and_then(|sub| sub.strip_suffix('.'))
            .is_some_and(|sub| !sub.is_empty() && !sub.ends_with('.')),
        None => pattern == origin,
    })
}

/// Build the provider client and serve until a shutdown signal arrives.
///
/// Fails before binding when the selected provider cannot be constructed.
pub async fn run(config: Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- DebateKit Configuration ---");
    info!("LLM Provider: {}", config.provider.name());
    info!("Model: {}", config.active_model());
    info!("Bind Address: {}", config.server.addr);
    info!("Allowed Origins: {}", config.server.allowed_origins.join(", "));
    info!("-------------------------------");

    let client = new_client(&config).inspect_err(|e| {
        error!("Failed to initialize {} client: {}", config.provider.name(), e);
    })?;

    let state = AppState::new(DebateCoach::new(client), config.server.allowed_origins.clone());
    let app = build_router(state);

    let listener = TcpListener::bind(&config.server.addr).await.inspect_err(|e| {
        error!("Failed to bind {}: {}", config.server.addr, e);
    })?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
