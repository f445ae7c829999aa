//! Scryfall card search.

use tracing::debug;

use crate::error::{Result, UpstreamKind};
use crate::models::{CardSearchRequest, CardSearchResponse};
use crate::normalize;
use crate::query_builder;
use crate::CatalogClient;

/// Query interface for Scryfall cards.
pub struct CardQuery<'a> {
    client: &'a CatalogClient,
}

impl<'a> CardQuery<'a> {
    pub fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Run one page of a card search and normalize the results.
    pub fn search(&self, req: &CardSearchRequest) -> Result<CardSearchResponse> {
        let endpoints = self.client.endpoints();
        let query = query_builder::card_search(&endpoints.scryfall_api, req);
        let payload = self
            .client
            .upstream()
            .get_json(UpstreamKind::Scryfall, query.url())?;

        let page = normalize::normalize_card_page(&payload, &endpoints.scryfall_card_base());
        debug!(
            query = query.query(),
            returned = page.cards.len(),
            has_more = page.has_more,
            "card search"
        );

        Ok(CardSearchResponse {
            query: query.query().to_string(),
            request_url: query.url().to_string(),
            has_more: page.has_more,
            next_page: page.next_page,
            total_cards: page.total_cards,
            cards: page.cards,
        })
    }
}
