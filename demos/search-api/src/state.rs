/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async catalog client. Dispatches blocking upstream calls to a thread
    /// pool internally and owns the site-total cache.
    pub catalog: mtg_catalog_search::AsyncCatalogClient,
}
