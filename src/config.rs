use std::time::Duration;

pub const ARCHIDEKT_API_BASE: &str = "https://archidekt.com/api";
pub const ARCHIDEKT_DECK_PAGE_BASE: &str = "https://archidekt.com/decks";
pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";

/// Archidekt endpoint that lists decks matching card/color/format filters.
pub const ARCHIDEKT_DECK_SEARCH_PATH: &str = "/decks/cards/";
pub const SCRYFALL_CARD_SEARCH_PATH: &str = "/cards/search";

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;
/// Archidekt ordering token for "most recent first".
pub const DEFAULT_DECK_ORDER: &str = "-createdAt";

pub const DEFAULT_CARD_ORDER: &str = "edhrec";
pub const DEFAULT_CARD_UNIQUE: &str = "cards";
pub const DEFAULT_CARD_PAGE: u32 = 1;

/// Separator between face texts of split/transform cards.
pub const FACE_SEPARATOR: &str = " // ";

/// Longest upstream body excerpt kept in a rejection error, in characters.
pub const ERROR_SNIPPET_CHARS: usize = 200;

pub const SITE_TOTAL_TTL: Duration = Duration::from_secs(6 * 60 * 60);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Base URLs of both upstreams. Overridable for staging mirrors and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub archidekt_api: String,
    pub archidekt_deck_page: String,
    pub scryfall_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            archidekt_api: ARCHIDEKT_API_BASE.to_string(),
            archidekt_deck_page: ARCHIDEKT_DECK_PAGE_BASE.to_string(),
            scryfall_api: SCRYFALL_API_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Prefix for locally derived card URLs.
    pub fn scryfall_card_base(&self) -> String {
        format!("{}/cards", self.scryfall_api)
    }
}
