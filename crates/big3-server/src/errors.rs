use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("exercise catalog unavailable: {0}")]
    Catalog(#[from] big3_core::CatalogError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Details go to the log, not to the client.
        tracing::error!(error = %self, "request failed");
        let error = match &self {
            ServerError::Catalog(_) => "Failed to load exercise configuration",
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error })).into_response()
    }
}
