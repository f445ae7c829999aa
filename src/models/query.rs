use serde::Serialize;

/// A built upstream query and the full URL it was embedded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamQuery {
    query: String,
    url: String,
}

impl UpstreamQuery {
    pub(crate) fn new(query: String, url: String) -> Self {
        Self { query, url }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for UpstreamQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}
