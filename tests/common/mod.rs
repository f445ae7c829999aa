//! Shared test fixtures for the catalog client integration tests.
//!
//! Provides a scripted [`StubUpstream`] that records every requested URL, a
//! [`ManualClock`] for driving cache TTLs, and a `client_with` helper that wires
//! both into a [`CatalogClient`].

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mtg_catalog_search::error::{CatalogError, Result, UpstreamKind};
use mtg_catalog_search::{CatalogClient, Clock, Upstream};
use serde_json::Value;

pub const HOUR_MS: u64 = 60 * 60 * 1000;

type Responder = dyn Fn(&str) -> Result<Value> + Send + Sync;

/// Upstream double answering from a closure over the requested URL.
pub struct StubUpstream {
    responder: Box<Responder>,
    calls: Mutex<Vec<String>>,
}

impl StubUpstream {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Always answer with the same payload.
    pub fn fixed(payload: Value) -> Arc<Self> {
        Self::new(move |_| Ok(payload.clone()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Upstream for StubUpstream {
    fn get_json(&self, _upstream: UpstreamKind, url: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(url.to_string());
        (self.responder)(url)
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn at(ms: u64) -> Arc<Self> {
        Arc::new(Self {
            now: AtomicU64::new(ms),
        })
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Client wired to the stub upstream and clock.
pub fn client_with(upstream: Arc<StubUpstream>, clock: Arc<ManualClock>) -> CatalogClient {
    CatalogClient::builder()
        .upstream(upstream)
        .clock(clock)
        .build()
        .unwrap()
}

pub fn unreachable_archidekt() -> CatalogError {
    CatalogError::UpstreamUnreachable {
        upstream: UpstreamKind::Archidekt,
        message: "connection reset".to_string(),
    }
}

pub fn is_site_total_url(url: &str) -> bool {
    url.ends_with("/decks/cards/?pageSize=1")
}
