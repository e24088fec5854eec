//! Shared pipeline helpers for CLI commands.
//!
//! Contains project root resolution, loading the configured sources into a
//! [`SourceDb`], and turning resolved routes into consumer registrations.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use sift_config::{Fallback, OutputFormat, ResolvedRoute, RoutingConfig, CONFIG_FILE_NAME};
use sift_diagnostics::{
    stderr_consumer, ConsumerPair, FileSpecificConsumer, JsonLinesConsumer, NullConsumer,
    StreamConsumer,
};
use sift_source::SourceDb;

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing `sift.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE_NAME} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself).
/// Otherwise walks up from the current directory looking for `sift.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Loads every routed input and every extra source into a fresh [`SourceDb`].
///
/// Buffers are registered under the identifiers written in the configuration,
/// so rendered locations read the same as the configuration file.
pub fn load_sources(
    routes: &[ResolvedRoute],
    extra_sources: &[(String, PathBuf)],
) -> Result<SourceDb, Box<dyn std::error::Error>> {
    let mut db = SourceDb::new();
    let inputs = routes
        .iter()
        .map(|route| (&route.identifier, &route.input))
        .chain(extra_sources.iter().map(|(identifier, path)| (identifier, path)));
    for (identifier, path) in inputs {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        db.add_source(identifier.as_str(), content);
    }
    tracing::debug!(buffers = db.len(), "loaded sources");
    Ok(db)
}

/// Builds the router for the resolved routes.
///
/// Output files are created (with their parent directories) up front. Routes
/// without an output are registered as suppressed. When the fallback is
/// `stderr`, a catch-all terminal consumer is registered last.
pub fn build_router(
    config: &RoutingConfig,
    routes: &[ResolvedRoute],
    color: bool,
) -> Result<FileSpecificConsumer<'static>, Box<dyn std::error::Error>> {
    let mut registrations = Vec::with_capacity(routes.len() + 1);
    for route in routes {
        registrations.push(registration_for(route, color)?);
    }
    if config.routing.fallback == Fallback::Stderr {
        registrations.push(ConsumerPair::unassociated(stderr_consumer(color)));
    }
    Ok(FileSpecificConsumer::new(registrations)?)
}

fn registration_for(
    route: &ResolvedRoute,
    color: bool,
) -> Result<ConsumerPair<'static>, Box<dyn std::error::Error>> {
    if route.format == OutputFormat::Null {
        return Ok(ConsumerPair::new(route.identifier.clone(), NullConsumer));
    }
    let Some(output) = &route.output else {
        return Ok(ConsumerPair::suppressed(route.identifier.clone()));
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output)
        .map_err(|e| format!("failed to create {}: {e}", output.display()))?;
    let pair = match route.format {
        OutputFormat::Text => {
            ConsumerPair::new(route.identifier.clone(), StreamConsumer::new(file, color))
        }
        OutputFormat::Json => ConsumerPair::new(
            route.identifier.clone(),
            JsonLinesConsumer::new(BufWriter::new(file)),
        ),
        OutputFormat::Null => ConsumerPair::new(route.identifier.clone(), NullConsumer),
    };
    Ok(pair)
}
