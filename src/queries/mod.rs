//! Query modules for the catalog client.
//!
//! Each module provides a query struct that borrows from a
//! [`CatalogClient`](crate::CatalogClient) and runs one upstream round trip per
//! call: build the query, fetch, normalize.

pub mod cards;
pub mod decks;

pub use cards::CardQuery;
pub use decks::DeckQuery;
