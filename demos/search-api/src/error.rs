use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use mtg_catalog_search::endpoint::{self, Endpoint};
use mtg_catalog_search::CatalogError;

use crate::routes::with_headers;

/// A classified catalog error rendered as `{"ok": false, "error": "..."}`
/// with the status the error maps to.
pub struct AppError {
    pub endpoint: Endpoint,
    pub error: CatalogError,
}

impl AppError {
    pub fn new(endpoint: Endpoint, error: CatalogError) -> Self {
        Self { endpoint, error }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.error, "request failed");
        }
        let body = Json(endpoint::error_body(&self.error));
        with_headers(self.endpoint, (status, body).into_response(), false)
    }
}
