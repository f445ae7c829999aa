//! Normalized Magic: The Gathering search across Archidekt and Scryfall.
//!
//! Provides a client that turns loosely typed search intents into each
//! upstream's query syntax, fetches one page of results, and normalizes the
//! heterogeneous responses into fixed-shape records. The Archidekt site-wide
//! deck total is cached for six hours.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_catalog_search::{CatalogClient, CardSearchRequest, DeckSearchRequest};
//!
//! let client = CatalogClient::builder().build().unwrap();
//!
//! let decks = client.decks().search(&DeckSearchRequest {
//!     colors: vec!["Blue".into(), "Black".into()],
//!     formats: vec!["Commander".into()],
//!     include_site_total: true,
//!     ..Default::default()
//! }).unwrap();
//!
//! let cards = client.cards().search(&CardSearchRequest {
//!     colors: vec!["Green".into()],
//!     format: "Commander".into(),
//!     ..Default::default()
//! }).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod query_builder;
pub mod upstream;
pub mod vocab;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogClient;
pub use cache::{CacheState, Clock, SiteTotalCache, SystemClock};
pub use config::Endpoints;
pub use endpoint::{Dispatch, Endpoint};
pub use error::{CatalogError, Result, UpstreamKind};
pub use models::{
    CardSearchRequest, CardSearchResponse, DeckLookupRequest, DeckLookupResponse,
    DeckSearchRequest, DeckSearchResponse, NormalizedCard, NormalizedDeck, UpstreamQuery,
};
pub use upstream::{HttpUpstream, Upstream};
pub use vocab::Color;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogClient`].
///
/// Use [`CatalogClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogClientBuilder::build).
pub struct CatalogClientBuilder {
    endpoints: Endpoints,
    timeout: Duration,
    user_agent: String,
    site_total_ttl: Duration,
    clock: Option<Arc<dyn Clock>>,
    upstream: Option<Arc<dyn Upstream>>,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::default_user_agent(),
            site_total_ttl: config::SITE_TOTAL_TTL,
            clock: None,
            upstream: None,
        }
    }
}

impl CatalogClientBuilder {
    /// Replace all upstream base URLs at once.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Archidekt API base, e.g. `https://archidekt.com/api`.
    pub fn archidekt_api<S: Into<String>>(mut self, base: S) -> Self {
        self.endpoints.archidekt_api = base.into();
        self
    }

    /// Scryfall API base, e.g. `https://api.scryfall.com`.
    pub fn scryfall_api<S: Into<String>>(mut self, base: S) -> Self {
        self.endpoints.scryfall_api = base.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    ///
    /// Ignored when a custom [`upstream`](Self::upstream) is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` sent upstream. Scryfall rejects requests without one.
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override how long the site total stays fresh. Defaults to 6 hours.
    pub fn site_total_ttl(mut self, ttl: Duration) -> Self {
        self.site_total_ttl = ttl;
        self
    }

    /// Use a custom clock for site-total freshness checks.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Use a custom upstream transport instead of the default HTTP client.
    pub fn upstream(mut self, upstream: Arc<dyn Upstream>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Build the client. Only fails if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<CatalogClient> {
        let upstream: Arc<dyn Upstream> = match self.upstream {
            Some(upstream) => upstream,
            None => Arc::new(HttpUpstream::new(self.timeout, &self.user_agent)?),
        };
        let site_total = match self.clock {
            Some(clock) => SiteTotalCache::with_clock(self.site_total_ttl, clock),
            None => SiteTotalCache::new(self.site_total_ttl),
        };
        Ok(CatalogClient {
            endpoints: self.endpoints,
            upstream,
            site_total,
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Owns the upstream transport and the site-total cache, and exposes
/// per-upstream query interfaces as lightweight borrowing wrappers. The client
/// is `Send + Sync`; share it behind an `Arc` to serve concurrent requests.
pub struct CatalogClient {
    endpoints: Endpoints,
    upstream: Arc<dyn Upstream>,
    site_total: SiteTotalCache,
}

impl CatalogClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    /// Access the Archidekt deck query interface.
    pub fn decks(&self) -> queries::DeckQuery<'_> {
        queries::DeckQuery::new(self)
    }

    /// Access the Scryfall card query interface.
    pub fn cards(&self) -> queries::CardQuery<'_> {
        queries::CardQuery::new(self)
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn upstream(&self) -> &dyn Upstream {
        self.upstream.as_ref()
    }

    /// The cache holding the Archidekt site total.
    pub fn site_total_cache(&self) -> &SiteTotalCache {
        &self.site_total
    }
}

impl fmt::Display for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogClient(archidekt={}, scryfall={}, site_total={:?})",
            self.endpoints.archidekt_api,
            self.endpoints.scryfall_api,
            self.site_total.state()
        )
    }
}
