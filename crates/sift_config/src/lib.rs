//! Parsing and validation of `sift.toml` routing configuration files.
//!
//! The configuration lists the input files that get their own diagnostics
//! output, the format of each output, and what happens to diagnostics that
//! belong to no listed file. [`resolve_routes`] anchors the configured paths
//! at the project directory.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve_routes, resolve_sources, ResolvedRoute};
pub use types::*;
