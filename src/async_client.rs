//! Async wrapper around [`CatalogClient`] for use in async runtimes (Tokio, etc.).
//!
//! The core client uses a blocking HTTP client, so every call is dispatched to
//! tokio's blocking pool via [`tokio::task::spawn_blocking`]. The client is
//! shared through an `Arc` without a lock: requests never wait on each other.
//!
//! # Example
//!
//! ```no_run
//! use mtg_catalog_search::{AsyncCatalogClient, CardSearchRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncCatalogClient::builder().build().await.unwrap();
//!     let cards = client
//!         .search_cards(CardSearchRequest { q: "t:dragon".into(), ..Default::default() })
//!         .await
//!         .unwrap();
//!     println!("{} cards", cards.total_cards);
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::models::{
    CardSearchRequest, CardSearchResponse, DeckLookupRequest, DeckLookupResponse,
    DeckSearchRequest, DeckSearchResponse,
};
use crate::{CatalogClient, Endpoints};

// ---------------------------------------------------------------------------
// AsyncCatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncCatalogClient`]. Mirrors the sync builder's HTTP settings.
pub struct AsyncCatalogClientBuilder {
    endpoints: Endpoints,
    timeout: Duration,
    user_agent: Option<String>,
    site_total_ttl: Option<Duration>,
}

impl Default for AsyncCatalogClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: crate::config::DEFAULT_TIMEOUT,
            user_agent: None,
            site_total_ttl: None,
        }
    }
}

impl AsyncCatalogClientBuilder {
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn site_total_ttl(mut self, ttl: Duration) -> Self {
        self.site_total_ttl = Some(ttl);
        self
    }

    /// Build the client on the blocking pool.
    ///
    /// The blocking HTTP client must not be created on an async worker thread.
    pub async fn build(self) -> Result<AsyncCatalogClient> {
        tokio::task::spawn_blocking(move || -> Result<AsyncCatalogClient> {
            let mut builder = CatalogClient::builder()
                .endpoints(self.endpoints)
                .timeout(self.timeout);
            if let Some(ua) = self.user_agent {
                builder = builder.user_agent(ua);
            }
            if let Some(ttl) = self.site_total_ttl {
                builder = builder.site_total_ttl(ttl);
            }
            Ok(AsyncCatalogClient::from_client(builder.build()?))
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogClient`]. Cheap to clone.
#[derive(Clone)]
pub struct AsyncCatalogClient {
    inner: Arc<CatalogClient>,
}

impl AsyncCatalogClient {
    pub fn builder() -> AsyncCatalogClientBuilder {
        AsyncCatalogClientBuilder::default()
    }

    /// Wrap an already configured client, e.g. one with a custom upstream.
    pub fn from_client(client: CatalogClient) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(join_error)?
    }

    pub async fn search_decks(&self, req: DeckSearchRequest) -> Result<DeckSearchResponse> {
        self.run(move |c| c.decks().search(&req)).await
    }

    pub async fn get_deck(&self, req: DeckLookupRequest) -> Result<DeckLookupResponse> {
        self.run(move |c| c.decks().get(&req)).await
    }

    pub async fn search_cards(&self, req: CardSearchRequest) -> Result<CardSearchResponse> {
        self.run(move |c| c.cards().search(&req)).await
    }

    /// Cached Archidekt site total; `None` if unknown.
    pub async fn site_total(&self) -> Result<Option<u64>> {
        self.run(|c| Ok(c.decks().site_total())).await
    }
}

fn join_error(e: tokio::task::JoinError) -> CatalogError {
    CatalogError::Config(format!("Task join error: {e}"))
}
