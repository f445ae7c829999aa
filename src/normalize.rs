//! Upstream payload normalization.
//!
//! Archidekt and Scryfall responses are decoded from `serde_json::Value` into the
//! fixed [`NormalizedDeck`] / [`NormalizedCard`] shapes. Shape tolerance is
//! expressed as explicit decode steps ([`DeckEnvelope`], [`DeckRecord`]) so each
//! variant can be tested on its own.

use serde_json::Value;

use crate::config;
use crate::models::{NormalizedCard, NormalizedDeck};

// ---------------------------------------------------------------------------
// Archidekt envelope
// ---------------------------------------------------------------------------

/// Where the item list of an Archidekt page was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckEnvelope<'a> {
    /// `{ "count": .., "results": [..] }`
    Results(&'a [Value]),
    /// `{ "total": .., "decks": [..] }`
    Decks(&'a [Value]),
    /// The payload itself is the list.
    Bare(&'a [Value]),
    /// Nothing list-shaped anywhere.
    Empty,
}

impl<'a> DeckEnvelope<'a> {
    pub fn decode(payload: &'a Value) -> Self {
        if let Some(items) = payload.get("results").and_then(Value::as_array) {
            return DeckEnvelope::Results(items);
        }
        if let Some(items) = payload.get("decks").and_then(Value::as_array) {
            return DeckEnvelope::Decks(items);
        }
        match payload.as_array() {
            Some(items) => DeckEnvelope::Bare(items),
            None => DeckEnvelope::Empty,
        }
    }

    pub fn items(&self) -> &'a [Value] {
        match *self {
            DeckEnvelope::Results(items)
            | DeckEnvelope::Decks(items)
            | DeckEnvelope::Bare(items) => items,
            DeckEnvelope::Empty => &[],
        }
    }
}

/// Total matching count from `count`, falling back to `total`.
pub fn total_count(payload: &Value) -> Option<u64> {
    ["count", "total"]
        .iter()
        .filter_map(|k| payload.get(*k))
        .find(|v| !v.is_null())
        .and_then(value_as_u64)
}

// ---------------------------------------------------------------------------
// Archidekt record
// ---------------------------------------------------------------------------

/// A single deck entry, either flat or wrapped one level under `deck`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckRecord<'a> {
    Flat(&'a Value),
    Nested { outer: &'a Value, inner: &'a Value },
}

impl<'a> DeckRecord<'a> {
    pub fn decode(item: &'a Value) -> Self {
        match item.get("deck").filter(|d| d.is_object()) {
            Some(inner) => DeckRecord::Nested { outer: item, inner },
            None => DeckRecord::Flat(item),
        }
    }

    /// Direct field first, nested field second. `null` counts as missing.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        let present = |v: &'a Value| v.get(key).filter(|f| !f.is_null());
        match *self {
            DeckRecord::Flat(item) => present(item),
            DeckRecord::Nested { outer, inner } => present(outer).or_else(|| present(inner)),
        }
    }
}

/// Normalize one deck entry. `deck_page_base` is the browsable deck URL prefix.
pub fn normalize_deck(item: &Value, deck_page_base: &str) -> NormalizedDeck {
    let record = DeckRecord::decode(item);
    let id = record.field("id").and_then(value_as_u64);
    NormalizedDeck {
        id,
        name: record.field("name").and_then(value_as_string),
        owner: record.field("owner").cloned(),
        format_id: record
            .field("format")
            .and_then(value_as_u64)
            .and_then(|f| u32::try_from(f).ok()),
        url: id.map(|id| format!("{}/{}", deck_page_base, id)),
        created_at: record.field("createdAt").and_then(value_as_string),
        updated_at: record.field("updatedAt").and_then(value_as_string),
    }
}

/// One normalized page of Archidekt search results.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckPage {
    pub total_matching: u64,
    pub decks: Vec<NormalizedDeck>,
}

pub fn normalize_deck_page(payload: &Value, deck_page_base: &str) -> DeckPage {
    let decks = DeckEnvelope::decode(payload)
        .items()
        .iter()
        .map(|item| normalize_deck(item, deck_page_base))
        .collect();
    DeckPage {
        total_matching: total_count(payload).unwrap_or(0),
        decks,
    }
}

// ---------------------------------------------------------------------------
// Scryfall
// ---------------------------------------------------------------------------

/// Normalize one Scryfall card object. `card_api_base` prefixes the derived URL.
pub fn normalize_card(card: &Value, card_api_base: &str) -> NormalizedCard {
    let faces = card
        .get("card_faces")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let id = card.get("id").and_then(value_as_string);

    NormalizedCard {
        url: id.as_ref().map(|id| format!("{}/{}", card_api_base, id)),
        id,
        name: card.get("name").and_then(value_as_string),
        type_line: card.get("type_line").and_then(value_as_string),
        colors: card.get("colors").and_then(string_list),
        color_identity: card.get("color_identity").and_then(string_list),
        scryfall_uri: card.get("scryfall_uri").and_then(value_as_string),
        image_uris: non_null(card.get("image_uris"))
            .or_else(|| faces.first().and_then(|f| non_null(f.get("image_uris")))),
        prices: non_null(card.get("prices")),
        oracle_text: oracle_text(card, faces),
    }
}

/// Rules text, synthesized from the faces of split/transform cards if needed.
fn oracle_text(card: &Value, faces: &[Value]) -> Option<String> {
    if let Some(text) = card
        .get("oracle_text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
    {
        return Some(text.to_string());
    }
    let joined = faces
        .iter()
        .filter_map(|f| f.get("oracle_text").and_then(Value::as_str))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(config::FACE_SEPARATOR);
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// One normalized page of Scryfall search results.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPage {
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: u64,
    pub cards: Vec<NormalizedCard>,
}

pub fn normalize_card_page(payload: &Value, card_api_base: &str) -> CardPage {
    let cards: Vec<NormalizedCard> = payload
        .get("data")
        .and_then(Value::as_array)
        .map(|data| data.iter().map(|c| normalize_card(c, card_api_base)).collect())
        .unwrap_or_default();
    let total_cards = payload
        .get("total_cards")
        .and_then(value_as_u64)
        .filter(|&n| n > 0)
        .unwrap_or(cards.len() as u64);

    CardPage {
        has_more: payload
            .get("has_more")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        next_page: payload
            .get("next_page")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        total_cards,
        cards,
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

/// Non-negative integer from a JSON number or numeric string.
fn value_as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_list(v: &Value) -> Option<Vec<String>> {
    v.as_array().map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

fn non_null(v: Option<&Value>) -> Option<Value> {
    v.filter(|v| !v.is_null()).cloned()
}
