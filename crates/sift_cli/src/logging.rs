//! Tracing setup for the `sift` binary.
//!
//! The subscriber is only installed when `--verbose` is passed or when
//! `SIFT_LOG` (or `RUST_LOG`) is set, using the same filter syntax as
//! `RUST_LOG`:
//!
//! ```bash
//! SIFT_LOG=sift_diagnostics=trace sift route events.jsonl
//! ```
//!
//! All output goes to stderr so it never mixes with routed diagnostics
//! written to stdout-backed outputs.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Builds the filter: `debug` when verbose, otherwise `SIFT_LOG`, then `RUST_LOG`.
fn build_filter(verbose: bool) -> Option<EnvFilter> {
    if verbose {
        return Some(EnvFilter::new("debug"));
    }
    if let Ok(val) = std::env::var(LOG_ENV) {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    None
}

/// Initialises the global tracing subscriber, or does nothing when logging
/// wasn't requested.
pub fn init_tracing(verbose: bool) {
    let Some(filter) = build_filter(verbose) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
