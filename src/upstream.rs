//! Single-shot JSON GET against an upstream catalog.
//!
//! The [`Upstream`] trait is the seam between query logic and the network so
//! tests can substitute canned payloads. [`HttpUpstream`] is the real
//! implementation on top of a blocking `reqwest` client. No retries happen here.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config;
use crate::error::{CatalogError, Result, UpstreamKind};

/// Performs one GET and returns the decoded JSON body or a classified failure.
pub trait Upstream: Send + Sync {
    fn get_json(&self, upstream: UpstreamKind, url: &str) -> Result<Value>;
}

// ---------------------------------------------------------------------------
// HttpUpstream
// ---------------------------------------------------------------------------

pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| CatalogError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Upstream for HttpUpstream {
    fn get_json(&self, upstream: UpstreamKind, url: &str) -> Result<Value> {
        debug!(%url, %upstream, "upstream request");
        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .map_err(|e| network_failure(upstream, &e))?;

        let status = resp.status();
        if !status.is_success() {
            // A body we cannot read still leaves the status worth reporting.
            let body = resp.text().unwrap_or_default();
            let err = rejected(upstream, status.as_u16(), &body);
            warn!(%url, status = status.as_u16(), "upstream rejected request");
            return Err(err);
        }

        resp.json::<Value>().map_err(|e| network_failure(upstream, &e))
    }
}

/// Classify a non-success upstream status, keeping a bounded body excerpt.
pub fn rejected(upstream: UpstreamKind, status: u16, body: &str) -> CatalogError {
    CatalogError::UpstreamRejected {
        upstream,
        status,
        snippet: snippet(body),
    }
}

fn network_failure(upstream: UpstreamKind, err: &reqwest::Error) -> CatalogError {
    warn!(%upstream, error = %err, "upstream unreachable");
    CatalogError::UpstreamUnreachable {
        upstream,
        message: err.to_string(),
    }
}

/// First [`config::ERROR_SNIPPET_CHARS`] characters of a body.
pub fn snippet(body: &str) -> String {
    body.chars().take(config::ERROR_SNIPPET_CHARS).collect()
}
