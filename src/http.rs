//! HTTP client construction and the single results-page fetch.
//!
//! The client spoofs a browser User-Agent (the engine serves an empty shell
//! to obvious bots) and follows redirects. No request timeout is configured
//! and nothing is retried: the tool makes exactly one attempt and reports
//! whatever happened.

use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Maximum redirects to follow before giving up.
const MAX_REDIRECTS: usize = 10;

/// Builds the HTTP client for the results-page fetch.
///
/// The configured User-Agent is attached to every request and compressed
/// responses are decoded transparently.
///
/// # Errors
///
/// Returns [`SearchError::Request`] if the client cannot be constructed,
/// for example when the User-Agent is not a valid header value.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| SearchError::Request(format!("failed to build HTTP client: {e}")))
}

/// Builds the results-page URL for a configuration.
///
/// The query is form-encoded as the `q` parameter, so spaces become `+`
/// and reserved characters such as `:` are percent-encoded.
///
/// # Errors
///
/// Returns [`SearchError::Request`] if the endpoint does not parse as an
/// absolute URL.
pub fn build_search_url(config: &SearchConfig) -> Result<Url, SearchError> {
    let mut url = Url::parse(&config.endpoint)
        .map_err(|e| SearchError::Request(format!("endpoint is not a valid URL: {e}")))?;
    url.query_pairs_mut().append_pair("q", &config.query);
    Ok(url)
}

/// Fetches the results page and decodes the body as UTF-8 text.
///
/// One GET, one attempt. The whole body is read before decoding, and the
/// decode is strict: a single invalid byte fails the fetch rather than
/// being replaced.
///
/// # Errors
///
/// Returns [`SearchError::Request`] if the URL cannot be built,
/// [`SearchError::Http`] if the request fails in transit or the server
/// answers with an error status, and [`SearchError::Decode`] if the body is
/// not valid UTF-8.
pub async fn fetch_html(
    client: &reqwest::Client,
    config: &SearchConfig,
) -> Result<String, SearchError> {
    let url = build_search_url(config)?;
    tracing::trace!(url = %url, "requesting results page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("server rejected the request: {e}")))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| SearchError::Http(format!("failed to read response body: {e}")))?;
    tracing::trace!(bytes = body.len(), "response body received");

    String::from_utf8(body.to_vec())
        .map_err(|e| SearchError::Decode(format!("response body is not valid UTF-8: {e}")))
}
