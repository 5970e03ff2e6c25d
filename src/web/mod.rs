//! Web layer module
//!
//! A thin axum surface over the acquisition pipeline:
//!
//! - `POST /api/emotion`: wallpaper for a mood label via the fallback cascade
//! - `POST /api/wallpaper`: procedural PNG with optional seed and style
//! - `GET /health`: liveness plus acquisition counters

use anyhow::Result;
use axum::{
    Router,
    http::HeaderName,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::services::FetchOrchestrator;

pub mod handlers;
pub mod responses;

pub use responses::{ApiResponse, HealthResponse, handle_error};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, orchestrator: Arc<FetchOrchestrator>) -> Result<Self> {
        let app = Self::create_router(AppState { orchestrator });
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/emotion", post(handlers::emotion))
            .route("/api/wallpaper", post(handlers::wallpaper))
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors())
            .with_state(state)
    }

    fn cors() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([
                HeaderName::from_static(handlers::DETECTED_EMOTION_HEADER),
                HeaderName::from_static(handlers::WALLPAPER_TIER_HEADER),
                HeaderName::from_static(handlers::MOOD_HEADER),
                HeaderName::from_static(handlers::SEED_HEADER),
            ])
    }

    /// Start the web server, stopping on Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Listening on http://{}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<FetchOrchestrator>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
