//! Format and color vocabularies for both upstream catalogs.
//!
//! Human-readable names as they appear in client requests are mapped to each
//! upstream's own identifiers. Lookups never fail: an unrecognized name simply
//! yields `None` and the caller drops it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

static ARCHIDEKT_FORMATS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("Standard", 1),
        ("Modern", 2),
        // Commander is spelled three ways in the UI
        ("Commander / EDH", 3),
        ("Commander/EDH", 3),
        ("Commander", 3),
        ("Legacy", 4),
        ("Vintage", 5),
        ("Pauper", 6),
        ("Custom", 7),
        ("Frontier", 8),
        ("Future Standard", 9),
        ("Penny Dreadful", 10),
        ("1v1 Commander", 11),
        ("Dual Commander", 12),
        ("Brawl", 13),
    ])
});

static SCRYFALL_FORMATS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Standard", "standard"),
        ("Modern", "modern"),
        ("Pioneer", "pioneer"),
        ("Legacy", "legacy"),
        ("Vintage", "vintage"),
        ("Pauper", "pauper"),
        ("Brawl", "brawl"),
        ("Commander", "commander"),
        ("Commander/EDH", "commander"),
        ("Commander / EDH", "commander"),
    ])
});

/// Archidekt's numeric format id for a human format name.
pub fn archidekt_format_id(name: &str) -> Option<u32> {
    ARCHIDEKT_FORMATS.get(name).copied()
}

/// Scryfall's `legal:` keyword for a human format name.
pub fn scryfall_format(name: &str) -> Option<&'static str> {
    SCRYFALL_FORMATS.get(name).copied()
}

/// Resolve format names to Archidekt ids in input order.
///
/// Unknown names are dropped, and aliases resolving to an id already seen
/// are collapsed into it.
pub fn archidekt_format_ids<S: AsRef<str>>(names: &[S]) -> Vec<u32> {
    let mut ids: Vec<u32> = Vec::with_capacity(names.len());
    for id in names.iter().filter_map(|n| archidekt_format_id(n.as_ref())) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// The closed six-member color vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];

    /// Parse a canonical color name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Canonical name, also the value Archidekt expects in its `colors` filter.
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Colorless => "Colorless",
        }
    }

    /// Scryfall color-identity letter.
    pub fn letter(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Blue => 'u',
            Color::Black => 'b',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Colorless => 'c',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Keep only recognized color names, preserving input order and dropping repeats.
pub fn known_colors<S: AsRef<str>>(names: &[S]) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(names.len());
    for color in names.iter().filter_map(|n| Color::from_name(n.as_ref())) {
        if !out.contains(&color) {
            out.push(color);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commander_aliases_share_one_id() {
        assert_eq!(archidekt_format_id("Commander"), Some(3));
        assert_eq!(archidekt_format_id("Commander/EDH"), Some(3));
        assert_eq!(archidekt_format_id("Commander / EDH"), Some(3));
        assert_eq!(scryfall_format("Commander / EDH"), Some("commander"));
    }

    #[test]
    fn unknown_names_are_absent() {
        assert_eq!(archidekt_format_id("Pioneer"), None);
        assert_eq!(scryfall_format("Penny Dreadful"), None);
        assert_eq!(Color::from_name("blue"), None);
        assert_eq!(Color::from_name("Purple"), None);
    }

    #[test]
    fn known_colors_filters_and_dedups() {
        let colors = known_colors(&["Blue", "Purple", "Black", "Blue"]);
        assert_eq!(colors, vec![Color::Blue, Color::Black]);
    }
}
