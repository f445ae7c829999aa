use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// DeckSearchRequest — client intent for an Archidekt deck search
// ---------------------------------------------------------------------------

/// Loosely typed deck search intent as posted by a client.
///
/// Every field is optional on the wire. Text fields that arrive as anything
/// other than a string are blank, flags follow JSON truthiness, list fields
/// that are not arrays are empty, and `pageSize` is kept raw so that numeric
/// strings and garbage can be clamped or defaulted later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckSearchRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_list")]
    pub colors: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub formats: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub commanders: Vec<String>,
    pub page_size: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    pub order_by: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub include_site_total: bool,
}

// ---------------------------------------------------------------------------
// CardSearchRequest — client intent for a Scryfall card search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSearchRequest {
    #[serde(deserialize_with = "lenient_list")]
    pub colors: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub format: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub commander_only: bool,
    /// Raw Scryfall search syntax appended after the generated clauses.
    #[serde(deserialize_with = "lenient_string")]
    pub q: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub order: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub unique: Option<String>,
    #[serde(deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

// ---------------------------------------------------------------------------
// DeckLookupRequest — single Archidekt deck by id
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckLookupRequest {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    /// Fetch Archidekt's reduced `small` deck variant.
    #[serde(deserialize_with = "lenient_flag")]
    pub small: bool,
}

impl DeckLookupRequest {
    pub fn new(id: impl Into<String>, small: bool) -> Self {
        Self {
            id: id.into(),
            small,
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

fn lenient_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Body flags: JSON truthiness, so `0`, `""` and `null` are false.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    })
}

fn lenient_page<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Query-string flags: presence means true unless spelled as an explicit negative.
fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !matches!(s.trim(), "" | "0" | "false"),
        _ => false,
    })
}
