//! # snipfetch
//!
//! Single-shot web search snippet fetcher: one fixed DuckDuckGo query, the
//! matching result snippets printed as plain text.
//!
//! The crate scrapes the engine's HTML-only results page directly, so it
//! needs no API key and talks to no external service beyond the engine
//! itself. Extraction is two regular-expression passes over the raw page
//! (capture each `result__snippet` anchor's inner HTML, then delete the
//! remaining tags), faithfully reproducing the throwaway script this
//! replaces rather than parsing the document structurally.
//!
//! # Design
//!
//! - One GET request with a spoofed `User-Agent: Mozilla/5.0` header
//! - Strict UTF-8 decoding of the response body
//! - Snippets returned in document order, inner tags deleted, entities left
//!   as-is
//! - Every failure funnels into [`SearchError`]; the binary prints the
//!   message on stdout and still exits successfully

pub mod config;
pub mod error;
pub mod extract;
pub mod http;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use extract::SnippetExtractor;

/// Fetches the results page for `config` and returns the cleaned snippets.
///
/// Runs the whole pipeline in order: validate the configuration, build the
/// HTTP client and the extractor, fetch and decode the page, extract. The
/// client and patterns are constructed before any network traffic so a
/// local mistake never costs a request.
///
/// The returned lines are in document order. An empty vector means the page
/// held no recognisable snippets, which is a normal outcome for a query
/// with no results.
///
/// # Errors
///
/// Returns [`SearchError`] if the configuration is invalid, the request
/// cannot be built or sent, the server answers with an error status, the
/// body is not valid UTF-8, or an extraction pattern fails to compile.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> snipfetch::Result<()> {
/// let config = snipfetch::SearchConfig::default();
/// for line in snipfetch::search(&config).await? {
///     println!("{line}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(config: &SearchConfig) -> Result<Vec<String>> {
    config.validate()?;
    let client = http::build_client(config)?;
    let extractor = SnippetExtractor::new()?;

    let html = http::fetch_html(&client, config).await?;
    Ok(extractor.extract(&html))
}

/// Fetches snippets with the baked-in default configuration.
///
/// # Errors
///
/// Same failure modes as [`search`].
pub async fn search_default() -> Result<Vec<String>> {
    search(&SearchConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_rejects_blank_query_before_any_request() {
        let config = SearchConfig {
            query: "  ".to_string(),
            ..Default::default()
        };
        let err = search(&config).await.expect_err("validation should fail");
        assert_eq!(err.kind(), "config");
    }

    #[tokio::test]
    async fn search_rejects_bad_endpoint_before_any_request() {
        let config = SearchConfig {
            endpoint: "://missing-scheme".to_string(),
            ..Default::default()
        };
        let err = search(&config).await.expect_err("validation should fail");
        assert_eq!(err.kind(), "config");
    }
}
