//! Transport-facing classification for the three public operations.
//!
//! Nothing here performs I/O. A transport layer (see `demos/search-api`) asks
//! an [`Endpoint`] whether a verb is acceptable, which freshness and CORS
//! headers to send, and how to wrap a result or error into a JSON body.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{CatalogError, Result, UpstreamKind};

/// What the transport should do with an accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// CORS preflight: answer with an empty success.
    Preflight,
    /// Run the operation.
    Handle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    DeckSearch,
    DeckLookup,
    CardSearch,
}

impl Endpoint {
    /// The one verb that runs this operation.
    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::DeckSearch | Endpoint::CardSearch => "POST",
            Endpoint::DeckLookup => "GET",
        }
    }

    pub fn source(&self) -> UpstreamKind {
        match self {
            Endpoint::DeckSearch | Endpoint::DeckLookup => UpstreamKind::Archidekt,
            Endpoint::CardSearch => UpstreamKind::Scryfall,
        }
    }

    /// `Cache-Control` advice for successful responses.
    ///
    /// Single decks change less often than filtered result sets, so the
    /// lookup may be reused longer than either search.
    pub fn cache_control(&self) -> &'static str {
        match self {
            Endpoint::DeckSearch => "s-maxage=180, stale-while-revalidate=600",
            Endpoint::CardSearch => "s-maxage=120, stale-while-revalidate=600",
            Endpoint::DeckLookup => "s-maxage=600",
        }
    }

    pub fn cors_headers(&self) -> [(&'static str, String); 3] {
        [
            ("Access-Control-Allow-Origin", "*".to_string()),
            (
                "Access-Control-Allow-Methods",
                format!("{}, OPTIONS", self.method()),
            ),
            ("Access-Control-Allow-Headers", "Content-Type".to_string()),
        ]
    }

    /// Accept `OPTIONS` as a preflight and this endpoint's own verb; reject the rest.
    pub fn classify(&self, method: &str) -> Result<Dispatch> {
        if method.eq_ignore_ascii_case("OPTIONS") {
            Ok(Dispatch::Preflight)
        } else if method.eq_ignore_ascii_case(self.method()) {
            Ok(Dispatch::Handle)
        } else {
            let hint = match self {
                Endpoint::DeckLookup => "Use GET with a deck id.".to_string(),
                _ => format!("Use {} with JSON body.", self.method()),
            };
            Err(CatalogError::MethodNotAllowed(hint))
        }
    }

    /// Wrap a serialized result as `{ "ok": true, "source": .., ..result }`.
    pub fn success_body<T: Serialize>(&self, result: &T) -> Result<Value> {
        let mut body = Map::new();
        body.insert("ok".to_string(), Value::Bool(true));
        body.insert(
            "source".to_string(),
            Value::String(self.source().as_str().to_string()),
        );
        match serde_json::to_value(result)? {
            Value::Object(fields) => body.extend(fields),
            other => {
                body.insert("data".to_string(), other);
            }
        }
        Ok(Value::Object(body))
    }
}

/// `{ "ok": false, "error": message }`
pub fn error_body(err: &CatalogError) -> Value {
    json!({ "ok": false, "error": err.to_string() })
}

/// Parse a JSON request body; an empty or blank body means "all defaults".
pub fn parse_body<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}
