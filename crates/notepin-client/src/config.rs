/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Use `candidate` when it is non-empty, the default otherwise.
    /// One trailing `/` is dropped either way.
    pub fn new(candidate: Option<&str>) -> Self {
        let url = candidate.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: url.strip_suffix('/').unwrap_or(url).to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
