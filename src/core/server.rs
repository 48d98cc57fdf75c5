//! HTTP server assembly and serve loop.
//!
//! Builds the axum router from the per-domain API routers, adds the service
//! endpoints (`GET /`, `GET /health`), a JSON 404 fallback, and optional
//! CORS, then serves it on the configured address.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::config::HttpConfig;
use super::error::{Error, Result};
use crate::api;

/// The physics API HTTP server.
pub struct HttpServer {
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP server.
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(self) -> Result<()> {
        let addr = self.address();

        let mut app = router().layer(TraceLayer::new_for_http());

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Formulas: POST /api/{{domain}}/{{formula}}");
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the application router.
///
/// Exposed separately from [`HttpServer::run`] so integration tests can
/// exercise the exact production routes without binding a socket.
pub fn router() -> Router {
    api::router()
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .fallback(not_found)
}

/// Root handler - provides API info.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Physics API Server",
        "version": env!("CARGO_PKG_VERSION"),
        "domains": ["kinematics", "projectile", "work_energy", "electricity", "forces"],
        "documentation": "Send POST requests with JSON bodies to /api/{domain}/{formula}"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Fallback for unmapped routes, keeping the uniform error body shape.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
