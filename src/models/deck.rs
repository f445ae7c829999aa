use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// NormalizedDeck — one Archidekt search hit in fixed shape
// ---------------------------------------------------------------------------

/// A deck search result, independent of which upstream payload variant it came from.
///
/// Fields are always serialized, `null` when the upstream omitted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDeck {
    /// Archidekt deck ids are numeric. Numeric strings are accepted; any other
    /// id is reported as `null` and the deck gets no `url`.
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Owner object exactly as Archidekt reports it.
    pub owner: Option<Value>,
    pub format_id: Option<u32>,
    /// Browsable deck page, derived from `id`.
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSearchResponse {
    #[serde(rename = "requestUrl")]
    pub request_url: String,
    /// Number of decks on this page.
    pub count: usize,
    /// Number of decks matching the filters across all pages.
    pub total_matching: u64,
    /// Approximate number of public decks on the site, when requested and known.
    pub site_total: Option<u64>,
    pub decks: Vec<NormalizedDeck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckLookupResponse {
    /// Upstream deck payload, passed through untouched.
    pub deck: Value,
    pub url: String,
}
