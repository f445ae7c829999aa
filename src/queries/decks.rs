//! Archidekt deck search, single-deck lookup and the cached site total.

use tracing::debug;

use crate::error::{CatalogError, Result, UpstreamKind};
use crate::models::{DeckLookupRequest, DeckLookupResponse, DeckSearchRequest, DeckSearchResponse};
use crate::normalize;
use crate::query_builder;
use crate::CatalogClient;

// ---------------------------------------------------------------------------
// DeckQuery
// ---------------------------------------------------------------------------

/// Query interface for Archidekt decks.
pub struct DeckQuery<'a> {
    client: &'a CatalogClient,
}

impl<'a> DeckQuery<'a> {
    /// Create a new `DeckQuery` bound to the given client.
    pub fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Search decks and normalize the first page of results.
    ///
    /// When `include_site_total` is set, the cached site total is attached.
    /// A failure to obtain it yields `site_total: None`, never an error.
    pub fn search(&self, req: &DeckSearchRequest) -> Result<DeckSearchResponse> {
        let endpoints = self.client.endpoints();
        let query = query_builder::deck_search(&endpoints.archidekt_api, req);
        let payload = self
            .client
            .upstream()
            .get_json(UpstreamKind::Archidekt, query.url())?;

        let page = normalize::normalize_deck_page(&payload, &endpoints.archidekt_deck_page);
        debug!(
            url = query.url(),
            returned = page.decks.len(),
            total = page.total_matching,
            "deck search"
        );

        let site_total = if req.include_site_total {
            self.site_total()
        } else {
            None
        };

        Ok(DeckSearchResponse {
            request_url: query.url().to_string(),
            count: page.decks.len(),
            total_matching: page.total_matching,
            site_total,
            decks: page.decks,
        })
    }

    /// Fetch one deck by id, passing the upstream payload through untouched.
    pub fn get(&self, req: &DeckLookupRequest) -> Result<DeckLookupResponse> {
        if req.id.trim().is_empty() {
            return Err(CatalogError::InvalidRequest("Missing deck id".to_string()));
        }
        let query =
            query_builder::deck_lookup(&self.client.endpoints().archidekt_api, &req.id, req.small);
        let deck = self
            .client
            .upstream()
            .get_json(UpstreamKind::Archidekt, query.url())?;
        Ok(DeckLookupResponse {
            deck,
            url: query.url().to_string(),
        })
    }

    /// Approximate number of public decks on Archidekt, served from the cache.
    ///
    /// Returns `None` when the total has never been fetched successfully.
    pub fn site_total(&self) -> Option<u64> {
        self.client.site_total_cache().get_or_refresh(|| {
            let query = query_builder::site_total(&self.client.endpoints().archidekt_api);
            let payload = self
                .client
                .upstream()
                .get_json(UpstreamKind::Archidekt, query.url())?;
            Ok(normalize::total_count(&payload).filter(|&n| n > 0))
        })
    }
}
