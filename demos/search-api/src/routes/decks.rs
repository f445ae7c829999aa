use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::response::Response;

use mtg_catalog_search::endpoint::{self, Endpoint};
use mtg_catalog_search::{DeckLookupRequest, DeckSearchRequest};

use crate::error::AppError;
use crate::routes::{preflight, respond};
use crate::state::AppState;

/// POST /api/archidekt-search
///
/// Body: `{ name, colors, formats, commanders, pageSize, orderBy, includeSiteTotal }`.
pub async fn search_decks(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: String,
) -> Result<Response, AppError> {
    let ep = Endpoint::DeckSearch;
    if let Some(done) = preflight(ep, method.as_str())? {
        return Ok(done);
    }

    let req: DeckSearchRequest = endpoint::parse_body(&body).map_err(|e| AppError::new(ep, e))?;
    let result = state
        .catalog
        .search_decks(req)
        .await
        .map_err(|e| AppError::new(ep, e))?;
    respond(ep, &result)
}

/// GET /api/archidekt-deck?id=123&small=1
pub async fn get_deck(
    State(state): State<Arc<AppState>>,
    method: Method,
    Query(req): Query<DeckLookupRequest>,
) -> Result<Response, AppError> {
    lookup(state, method, req).await
}

/// GET /api/archidekt-deck/:id?small=1
pub async fn get_deck_by_path(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path(id): Path<String>,
    Query(mut req): Query<DeckLookupRequest>,
) -> Result<Response, AppError> {
    req.id = id;
    lookup(state, method, req).await
}

async fn lookup(
    state: Arc<AppState>,
    method: Method,
    req: DeckLookupRequest,
) -> Result<Response, AppError> {
    let ep = Endpoint::DeckLookup;
    if let Some(done) = preflight(ep, method.as_str())? {
        return Ok(done);
    }

    let result = state
        .catalog
        .get_deck(req)
        .await
        .map_err(|e| AppError::new(ep, e))?;
    respond(ep, &result)
}
