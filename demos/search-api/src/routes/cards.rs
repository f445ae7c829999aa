use std::sync::Arc;

use axum::extract::State;
use axum::http::Method;
use axum::response::Response;

use mtg_catalog_search::endpoint::{self, Endpoint};
use mtg_catalog_search::CardSearchRequest;

use crate::error::AppError;
use crate::routes::{preflight, respond};
use crate::state::AppState;

/// POST /api/scryfall-search
///
/// Body: `{ colors, format, commanderOnly, q, order, unique, page }`.
pub async fn search_cards(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: String,
) -> Result<Response, AppError> {
    let ep = Endpoint::CardSearch;
    if let Some(done) = preflight(ep, method.as_str())? {
        return Ok(done);
    }

    let req: CardSearchRequest = endpoint::parse_body(&body).map_err(|e| AppError::new(ep, e))?;
    let result = state
        .catalog
        .search_cards(req)
        .await
        .map_err(|e| AppError::new(ep, e))?;
    respond(ep, &result)
}
