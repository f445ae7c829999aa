//! Response normalization across the payload variants both upstreams produce.

use mtg_catalog_search::normalize::{self, DeckEnvelope};
use serde_json::json;

const DECK_PAGE: &str = "https://archidekt.com/decks";
const CARD_API: &str = "https://api.scryfall.com/cards";

// ---------------------------------------------------------------------------
// Archidekt envelopes
// ---------------------------------------------------------------------------

#[test]
fn envelope_prefers_results_then_decks_then_bare() {
    let results = json!({"results": [{"id": 1}], "decks": [{"id": 2}, {"id": 3}]});
    assert!(matches!(DeckEnvelope::decode(&results), DeckEnvelope::Results(items) if items.len() == 1));

    let decks = json!({"total": 2, "decks": [{"id": 2}, {"id": 3}]});
    assert!(matches!(DeckEnvelope::decode(&decks), DeckEnvelope::Decks(items) if items.len() == 2));

    let bare = json!([{"id": 4}]);
    assert!(matches!(DeckEnvelope::decode(&bare), DeckEnvelope::Bare(items) if items.len() == 1));

    let nothing = json!({"detail": "weird"});
    assert_eq!(DeckEnvelope::decode(&nothing), DeckEnvelope::Empty);
    assert!(DeckEnvelope::decode(&nothing).items().is_empty());
}

#[test]
fn non_array_results_fall_through() {
    let payload = json!({"results": null, "decks": [{"id": 9}]});
    let page = normalize::normalize_deck_page(&payload, DECK_PAGE);
    assert_eq!(page.decks.len(), 1);
    assert_eq!(page.decks[0].id, Some(9));
}

#[test]
fn total_matching_reads_count_or_total() {
    let by_count = json!({"count": 1234, "results": []});
    assert_eq!(normalize::normalize_deck_page(&by_count, DECK_PAGE).total_matching, 1234);

    let by_total = json!({"total": "56", "decks": []});
    assert_eq!(normalize::normalize_deck_page(&by_total, DECK_PAGE).total_matching, 56);
}

#[test]
fn empty_page_normalizes_to_zero() {
    let payload = json!({"count": 0, "next": null, "previous": null, "results": []});
    let page = normalize::normalize_deck_page(&payload, DECK_PAGE);
    assert_eq!(page.total_matching, 0);
    assert!(page.decks.is_empty());
}

// ---------------------------------------------------------------------------
// Archidekt records
// ---------------------------------------------------------------------------

#[test]
fn flat_and_nested_records_normalize_identically() {
    let fields = json!({
        "id": 4242,
        "name": "Atraxa Superfriends",
        "owner": {"id": 7, "username": "planeswalker"},
        "format": 3,
        "createdAt": "2024-01-02T03:04:05Z",
        "updatedAt": "2024-02-03T04:05:06Z"
    });
    let nested = json!({"deck": fields.clone()});

    let a = normalize::normalize_deck(&fields, DECK_PAGE);
    let b = normalize::normalize_deck(&nested, DECK_PAGE);
    assert_eq!(a, b);
    assert_eq!(a.id, Some(4242));
    assert_eq!(a.format_id, Some(3));
    assert_eq!(a.url.as_deref(), Some("https://archidekt.com/decks/4242"));
    assert_eq!(a.owner, Some(json!({"id": 7, "username": "planeswalker"})));
}

#[test]
fn deck_url_ignores_upstream_url() {
    let item = json!({"id": 5, "url": "https://elsewhere.example/5"});
    let deck = normalize::normalize_deck(&item, DECK_PAGE);
    assert_eq!(deck.url.as_deref(), Some("https://archidekt.com/decks/5"));
}

#[test]
fn deck_ids_must_be_numeric() {
    let deck = normalize::normalize_deck(&json!({"id": "77"}), DECK_PAGE);
    assert_eq!(deck.id, Some(77));
    assert_eq!(deck.url.as_deref(), Some("https://archidekt.com/decks/77"));

    let deck = normalize::normalize_deck(&json!({"id": "abc", "name": "Slug"}), DECK_PAGE);
    assert_eq!(deck.id, None);
    assert_eq!(deck.url, None);
    assert_eq!(deck.name.as_deref(), Some("Slug"));
}

#[test]
fn missing_fields_serialize_as_null() {
    let deck = normalize::normalize_deck(&json!({}), DECK_PAGE);
    assert_eq!(deck.id, None);
    assert_eq!(deck.url, None);

    let value = serde_json::to_value(&deck).unwrap();
    let obj = value.as_object().unwrap();
    for key in ["id", "name", "owner", "formatId", "url", "createdAt", "updatedAt"] {
        assert!(obj.contains_key(key), "missing {key}");
        assert!(obj[key].is_null(), "{key} should be null");
    }
}

#[test]
fn direct_null_falls_back_to_nested_value() {
    let item = json!({"id": null, "name": "Direct", "deck": {"id": "77", "name": "Nested"}});
    let deck = normalize::normalize_deck(&item, DECK_PAGE);
    assert_eq!(deck.id, Some(77));
    assert_eq!(deck.name.as_deref(), Some("Direct"));
}

// ---------------------------------------------------------------------------
// Scryfall cards
// ---------------------------------------------------------------------------

#[test]
fn normal_card_passes_fields_through() {
    let card = json!({
        "id": "abc-123",
        "name": "Counterspell",
        "type_line": "Instant",
        "colors": ["U"],
        "color_identity": ["U"],
        "scryfall_uri": "https://scryfall.com/card/mh2/267/counterspell",
        "image_uris": {"normal": "https://img.example/normal.jpg"},
        "prices": {"usd": "1.50"},
        "oracle_text": "Counter target spell."
    });
    let n = normalize::normalize_card(&card, CARD_API);
    assert_eq!(n.id.as_deref(), Some("abc-123"));
    assert_eq!(n.url.as_deref(), Some("https://api.scryfall.com/cards/abc-123"));
    assert_eq!(n.colors, Some(vec!["U".to_string()]));
    assert_eq!(n.image_uris, Some(json!({"normal": "https://img.example/normal.jpg"})));
    assert_eq!(n.prices, Some(json!({"usd": "1.50"})));
    assert_eq!(n.oracle_text.as_deref(), Some("Counter target spell."));
}

#[test]
fn transform_card_joins_face_text_and_uses_first_face_image() {
    let card = json!({
        "id": "dfc-1",
        "name": "Delver of Secrets // Insectile Aberration",
        "card_faces": [
            {"oracle_text": "At the beginning of your upkeep, look at the top card.",
             "image_uris": {"normal": "front.jpg"}},
            {"oracle_text": "Flying", "image_uris": {"normal": "back.jpg"}}
        ]
    });
    let n = normalize::normalize_card(&card, CARD_API);
    assert_eq!(
        n.oracle_text.as_deref(),
        Some("At the beginning of your upkeep, look at the top card. // Flying")
    );
    assert_eq!(n.image_uris, Some(json!({"normal": "front.jpg"})));
}

#[test]
fn empty_face_texts_are_skipped() {
    let card = json!({
        "oracle_text": "",
        "card_faces": [{"oracle_text": ""}, {"oracle_text": "Flying"}, {}]
    });
    let n = normalize::normalize_card(&card, CARD_API);
    assert_eq!(n.oracle_text.as_deref(), Some("Flying"));
}

#[test]
fn card_without_text_images_or_prices_has_explicit_nulls() {
    let n = normalize::normalize_card(&json!({"id": "x", "prices": null}), CARD_API);
    assert_eq!(n.oracle_text, None);
    assert_eq!(n.image_uris, None);
    assert_eq!(n.prices, None);

    let value = serde_json::to_value(&n).unwrap();
    for key in ["image_uris", "prices", "oracle_text", "type_line", "colors"] {
        assert!(value[key].is_null(), "{key} should be null");
        assert!(value.as_object().unwrap().contains_key(key));
    }
}

#[test]
fn card_page_reads_paging_fields() {
    let payload = json!({
        "object": "list",
        "total_cards": 175,
        "has_more": true,
        "next_page": "https://api.scryfall.com/cards/search?page=2",
        "data": [{"id": "a"}, {"id": "b"}]
    });
    let page = normalize::normalize_card_page(&payload, CARD_API);
    assert!(page.has_more);
    assert_eq!(page.total_cards, 175);
    assert_eq!(
        page.next_page.as_deref(),
        Some("https://api.scryfall.com/cards/search?page=2")
    );
    assert_eq!(page.cards.len(), 2);
}

#[test]
fn card_page_total_falls_back_to_page_length() {
    let payload = json!({"data": [{"id": "a"}, {"id": "b"}, {"id": "c"}]});
    let page = normalize::normalize_card_page(&payload, CARD_API);
    assert!(!page.has_more);
    assert_eq!(page.next_page, None);
    assert_eq!(page.total_cards, 3);

    let empty = normalize::normalize_card_page(&json!({}), CARD_API);
    assert_eq!(empty.total_cards, 0);
    assert!(empty.cards.is_empty());
}
