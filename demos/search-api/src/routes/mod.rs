pub mod cards;
pub mod decks;

use axum::http::header::{HeaderName, HeaderValue, CACHE_CONTROL};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use mtg_catalog_search::endpoint::{Dispatch, Endpoint};

use crate::error::AppError;

/// Attach CORS headers, plus the endpoint's freshness hint when `cacheable`.
pub fn with_headers(endpoint: Endpoint, mut response: Response, cacheable: bool) -> Response {
    let headers = response.headers_mut();
    for (name, value) in endpoint.cors_headers() {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            headers.insert(name, value);
        }
    }
    if cacheable {
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static(endpoint.cache_control()),
        );
    }
    response
}

/// Classify the verb; `Ok(Some(..))` is a finished preflight response.
pub fn preflight(endpoint: Endpoint, method: &str) -> Result<Option<Response>, AppError> {
    match endpoint
        .classify(method)
        .map_err(|e| AppError::new(endpoint, e))?
    {
        Dispatch::Preflight => Ok(Some(with_headers(
            endpoint,
            StatusCode::OK.into_response(),
            false,
        ))),
        Dispatch::Handle => Ok(None),
    }
}

/// Wrap a result in the success envelope with CORS and cache headers.
pub fn respond<T: Serialize>(endpoint: Endpoint, result: &T) -> Result<Response, AppError> {
    let body = endpoint
        .success_body(result)
        .map_err(|e| AppError::new(endpoint, e))?;
    Ok(with_headers(endpoint, Json(body).into_response(), true))
}
