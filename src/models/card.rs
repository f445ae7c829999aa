use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// NormalizedCard — the subset of a Scryfall card object the UI needs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCard {
    pub id: Option<String>,
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub colors: Option<Vec<String>>,
    pub color_identity: Option<Vec<String>>,
    pub scryfall_uri: Option<String>,
    /// API resource URL derived from `id`.
    pub url: Option<String>,
    pub image_uris: Option<Value>,
    pub prices: Option<Value>,
    pub oracle_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSearchResponse {
    pub query: String,
    pub request_url: String,
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: u64,
    pub cards: Vec<NormalizedCard>,
}
