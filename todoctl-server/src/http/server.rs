//! Axum server setup
//!
//! Server skeleton with:
//! - CORS restricted to the local frontend dev origins
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C
//!
//! Schema initialization runs before the listener binds; a failure there
//! is fatal and the process never accepts traffic.

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db;

use super::routes;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Shared application state
///
/// Holds only the connection pool; no per-request state survives between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    // Allow the local React dev server (plus the 127.0.0.1 variant) with
    // credentials. Headers are mirrored because a wildcard cannot be
    // combined with credentials.
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::todos::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = db::create_pool(&path).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> anyhow::Result<()> {
    db::init_schema(&pool)
        .await
        .context("failed to initialize database schema")?;

    let app = build_router(AppState { pool });

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
