//! Search configuration with the tool's baked-in defaults.
//!
//! [`SearchConfig`] holds the three values the fetch depends on: the results
//! endpoint, the query expression, and the spoofed User-Agent header. They
//! are fixed for the shipped binary, but live in one explicit value so tests
//! can point the endpoint at a local mock server instead of the live engine.

use crate::error::SearchError;
use url::Url;

/// HTML-only results endpoint queried by default.
///
/// The `/html/` variant serves complete server-rendered markup, unlike the
/// JavaScript-driven main site, so the snippets are present in the body of
/// the one response.
pub const DEFAULT_ENDPOINT: &str = "https://duckduckgo.com/html/";

/// Query expression baked into the tool.
pub const DEFAULT_QUERY: &str = "site:developer.apple.com CIFormat RGBAh";

/// Browser-identifying User-Agent sent with the request.
///
/// The bare product token is enough to get past the endpoint's basic bot
/// filtering; no other headers are customised.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for one snippet fetch.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the search engine's HTML results page.
    pub endpoint: String,
    /// Search expression sent as the `q` query parameter.
    pub query: String,
    /// Value of the request's single custom header, `User-Agent`.
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query: DEFAULT_QUERY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the query or User-Agent is empty,
    /// or if the endpoint does not parse as an absolute URL.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.query.trim().is_empty() {
            return Err(SearchError::Config("query must not be empty".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user agent must not be empty".into()));
        }
        Url::parse(&self.endpoint)
            .map_err(|e| SearchError::Config(format!("endpoint is not a valid URL: {e}")))?;
        Ok(())
    }
}
