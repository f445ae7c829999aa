mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::any;
use axum::Router;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = mtg_catalog_search::AsyncCatalogClient::builder()
        .build()
        .await
        .expect("Failed to initialize catalog client");

    let state = Arc::new(AppState { catalog });

    // Routes accept any verb so unsupported ones get a classified 405 body.
    let app = Router::new()
        .route("/api/archidekt-search", any(routes::decks::search_decks))
        .route("/api/archidekt-deck", any(routes::decks::get_deck))
        .route("/api/archidekt-deck/{id}", any(routes::decks::get_deck_by_path))
        .route("/api/scryfall-search", any(routes::cards::search_cards))
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
