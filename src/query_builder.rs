//! Upstream query construction for Archidekt and Scryfall.
//!
//! Everything here is pure and infallible: malformed or empty intents degrade
//! to broader queries instead of erroring.
//!
//! # Example
//!
//! ```rust
//! use mtg_catalog_search::query_builder::QueryString;
//! let qs = QueryString::new()
//!     .param("name", "Atraxa")
//!     .list("colors", &["Blue", "Black"])
//!     .param("pageSize", "20")
//!     .build();
//! assert_eq!(qs, "name=Atraxa&colors=Blue%2CBlack&pageSize=20");
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use url::form_urlencoded;

use crate::config;
use crate::models::{CardSearchRequest, DeckSearchRequest, UpstreamQuery};
use crate::vocab::{self, Color};

/// Characters left alone by a URI component encoder.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ---------------------------------------------------------------------------
// QueryString
// ---------------------------------------------------------------------------

/// Builds a form-encoded query string, skipping empty values.
///
/// Methods return `&mut Self` for chaining.
#[derive(Debug, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless `value` is empty.
    pub fn param(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Append `key=a,b,c` unless `values` is empty.
    pub fn list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.param(key, &joined)
    }

    pub fn build(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

// ---------------------------------------------------------------------------
// Archidekt
// ---------------------------------------------------------------------------

/// Effective page size for a loosely typed input.
///
/// Missing, blank or non-numeric input uses the default; numbers are floored
/// and clamped into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
pub fn effective_page_size(raw: Option<&Value>) -> u32 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed.filter(|n| n.is_finite()) {
        Some(n) => n
            .floor()
            .clamp(config::MIN_PAGE_SIZE as f64, config::MAX_PAGE_SIZE as f64)
            as u32,
        None => config::DEFAULT_PAGE_SIZE,
    }
}

/// Commander names as a comma-joined list of double-quoted literals.
///
/// Quoting asks Archidekt for exact-name matches. Names are trimmed and
/// blank ones dropped.
pub fn commander_literals<S: AsRef<str>>(commanders: &[S]) -> Option<String> {
    let quoted: Vec<String> = commanders
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .map(|c| format!("\"{}\"", c))
        .collect();
    if quoted.is_empty() {
        None
    } else {
        Some(quoted.join(","))
    }
}

/// Build the Archidekt deck search query for a client intent.
pub fn deck_search(api_base: &str, req: &DeckSearchRequest) -> UpstreamQuery {
    let colors: Vec<&str> = vocab::known_colors(&req.colors)
        .iter()
        .map(Color::name)
        .collect();
    let format_ids: Vec<String> = vocab::archidekt_format_ids(&req.formats)
        .iter()
        .map(u32::to_string)
        .collect();
    let commanders = commander_literals(&req.commanders).unwrap_or_default();
    let order_by = if req.order_by.trim().is_empty() {
        config::DEFAULT_DECK_ORDER
    } else {
        req.order_by.as_str()
    };

    let query = QueryString::new()
        .param("name", &req.name)
        .list("colors", &colors)
        .list("formats", &format_ids)
        .param("commanders", &commanders)
        .param("pageSize", &effective_page_size(req.page_size.as_ref()).to_string())
        .param("orderBy", order_by)
        .build();

    let url = format!("{}{}?{}", api_base, config::ARCHIDEKT_DECK_SEARCH_PATH, query);
    UpstreamQuery::new(query, url)
}

/// Minimal unfiltered one-deck page; its total count approximates the site total.
pub fn site_total(api_base: &str) -> UpstreamQuery {
    let query = QueryString::new().param("pageSize", "1").build();
    let url = format!("{}{}?{}", api_base, config::ARCHIDEKT_DECK_SEARCH_PATH, query);
    UpstreamQuery::new(query, url)
}

/// Single deck lookup; `small` selects Archidekt's reduced payload.
pub fn deck_lookup(api_base: &str, id: &str, small: bool) -> UpstreamQuery {
    let id = utf8_percent_encode(id.trim(), COMPONENT).to_string();
    let path = if small {
        format!("/decks/{}/small/", id)
    } else {
        format!("/decks/{}/", id)
    };
    let url = format!("{}{}", api_base, path);
    UpstreamQuery::new(path, url)
}

// ---------------------------------------------------------------------------
// Scryfall
// ---------------------------------------------------------------------------

/// Color-identity letters for an `id<=` clause.
///
/// Letters are deduplicated and sorted. When more than one letter remains,
/// colorless is dropped: Scryfall's `c` only means something for colorless
/// or mono identities, never mixed ones.
pub fn identity_letters<S: AsRef<str>>(colors: &[S]) -> String {
    let mut letters: Vec<char> = vocab::known_colors(colors)
        .iter()
        .map(Color::letter)
        .collect();
    if letters.len() > 1 {
        letters.retain(|&l| l != Color::Colorless.letter());
    }
    letters.sort_unstable();
    letters.dedup();
    letters.into_iter().collect()
}

/// Scryfall search expression: identity, legality, commander, free text.
pub fn card_query(req: &CardSearchRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    let id = identity_letters(&req.colors);
    if !id.is_empty() {
        parts.push(format!("id<={}", id));
    }

    let format = vocab::scryfall_format(&req.format);
    if let Some(f) = format {
        parts.push(format!("legal:{}", f));
    }

    if req.commander_only || format == Some("commander") {
        parts.push("is:commander".to_string());
    }

    let text = req.q.trim();
    if !text.is_empty() {
        parts.push(text.to_string());
    }

    parts.join(" ")
}

/// Build the Scryfall card search URL for a client intent.
pub fn card_search(api_base: &str, req: &CardSearchRequest) -> UpstreamQuery {
    let query = card_query(req);
    let order = non_blank(req.order.as_deref()).unwrap_or(config::DEFAULT_CARD_ORDER);
    let unique = non_blank(req.unique.as_deref()).unwrap_or(config::DEFAULT_CARD_UNIQUE);
    let page = req.page.unwrap_or(config::DEFAULT_CARD_PAGE);

    let url = format!(
        "{}{}?q={}&order={}&unique={}&page={}",
        api_base,
        config::SCRYFALL_CARD_SEARCH_PATH,
        utf8_percent_encode(&query, COMPONENT),
        utf8_percent_encode(order, COMPONENT),
        utf8_percent_encode(unique, COMPONENT),
        page
    );
    UpstreamQuery::new(query, url)
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
