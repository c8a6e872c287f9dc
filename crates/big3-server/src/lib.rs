//! Big3 Timer server
//!
//! Serves the exercise catalog and a health check under `/api`, plus the
//! built frontend with a single-page-app fallback.

pub mod config;
pub mod errors;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use big3_core::catalog::BUNDLED_CATALOG;
use big3_core::CatalogError;
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use config::ServerConfig;
use errors::ServerError;

pub struct AppState {
    /// Catalog file to serve; the bundled catalog when unset.
    pub catalog_path: Option<PathBuf>,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// The catalog document exactly as stored, so fields the core types do
/// not model still reach the frontend.
async fn exercises(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ServerError> {
    let catalog: Value = match &state.catalog_path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CatalogError::Read {
                    path: path.clone(),
                    source,
                })?;
            serde_json::from_str(&content).map_err(CatalogError::Parse)?
        }
        None => serde_json::from_str(BUNDLED_CATALOG).map_err(CatalogError::Parse)?,
    };
    Ok(Json(catalog))
}

/// Build the application router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        catalog_path: config.catalog_path.clone(),
    });

    let mut router = Router::new()
        .route("/api/health", get(health))
        .route("/api/exercises", get(exercises));

    if config.static_dir.is_dir() {
        let index = config.static_dir.join("index.html");
        let files = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));
        router = router.fallback_service(files);
    } else {
        tracing::info!(
            dir = %config.static_dir.display(),
            "static directory missing, serving API only"
        );
    }

    if !config.is_production() {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
