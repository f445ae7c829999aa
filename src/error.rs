/// Which third-party catalog an upstream failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    Archidekt,
    Scryfall,
}

impl UpstreamKind {
    /// Lowercase source tag used in response envelopes.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamKind::Archidekt => "archidekt",
            UpstreamKind::Scryfall => "scryfall",
        }
    }
}

impl std::fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            UpstreamKind::Archidekt => "Archidekt",
            UpstreamKind::Scryfall => "Scryfall",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("{upstream} responded {status}: {snippet}")]
    UpstreamRejected {
        upstream: UpstreamKind,
        status: u16,
        snippet: String,
    },

    #[error("{upstream} unreachable: {message}")]
    UpstreamUnreachable {
        upstream: UpstreamKind,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// HTTP status a transport layer should answer with for this error.
    ///
    /// Upstream rejections keep the upstream's own status code; unreachable
    /// upstreams have no meaningful status and map to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::InvalidRequest(_) | CatalogError::Json(_) => 400,
            CatalogError::MethodNotAllowed(_) => 405,
            CatalogError::UpstreamRejected { status, .. } => *status,
            CatalogError::UpstreamUnreachable { .. } | CatalogError::Config(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
