//! Error types for the snipfetch crate.
//!
//! Every variant carries a stable, single-line message suitable for printing
//! as the program's final output line. The variants distinguish which stage
//! failed so the binary can log the kind internally; the printed output never
//! differentiates them.

/// Errors that can occur while fetching and extracting search snippets.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP client or the request URL could not be constructed.
    #[error("request error: {0}")]
    Request(String),

    /// The network call failed or the server answered with an error status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body is not valid UTF-8.
    #[error("decode error: {0}")]
    Decode(String),

    /// An extraction pattern failed to compile.
    #[error("extract error: {0}")]
    Extract(String),
}

impl SearchError {
    /// Returns a stable lowercase label naming the stage that failed.
    ///
    /// Used for diagnostic logging only. The program's printed output is the
    /// Display string and treats all kinds identically.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Request(_) => "request",
            Self::Http(_) => "http",
            Self::Decode(_) => "decode",
            Self::Extract(_) => "extract",
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SearchError>;
