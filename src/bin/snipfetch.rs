//! One-shot snippet fetch for the terminal.
//!
//! Runs the baked-in query and prints one cleaned snippet per line. On any
//! failure the error's description becomes the single output line instead,
//! and the process still exits successfully: the tool's contract is "print
//! what you got", never "signal what went wrong".
//!
//! All tracing goes to stderr so stdout carries nothing but the snippet
//! lines (or the one failure line).

use snipfetch::SearchConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = SearchConfig::default();
    match snipfetch::search(&config).await {
        Ok(lines) => {
            for line in &lines {
                println!("{line}");
            }
            tracing::debug!(count = lines.len(), "snippet lines printed");
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "search failed");
            println!("{err}");
        }
    }
}
