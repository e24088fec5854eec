//! Route resolution: anchoring configured paths and applying format defaults.

use crate::types::{OutputFormat, RoutingConfig};
use std::path::{Path, PathBuf};

/// A file route with paths anchored at the configuration directory and its
/// effective output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The identifier the input file is registered under (its path as written).
    pub identifier: String,
    /// The input file on disk.
    pub input: PathBuf,
    /// Where diagnostics are written; `None` suppresses them.
    pub output: Option<PathBuf>,
    /// The effective output format.
    pub format: OutputFormat,
}

/// Resolves every `[[files]]` entry against `base_dir`.
///
/// Absolute paths are kept as written. Routes keep their configuration order.
pub fn resolve_routes(config: &RoutingConfig, base_dir: &Path) -> Vec<ResolvedRoute> {
    config
        .files
        .iter()
        .map(|file| ResolvedRoute {
            identifier: file.path.clone(),
            input: base_dir.join(&file.path),
            output: file.output.as_ref().map(|out| base_dir.join(out)),
            format: file.format_or(config.routing.format),
        })
        .collect()
}

/// Resolves the extra, unrouted sources against `base_dir`.
pub fn resolve_sources(config: &RoutingConfig, base_dir: &Path) -> Vec<(String, PathBuf)> {
    config
        .routing
        .sources
        .iter()
        .map(|source| (source.clone(), base_dir.join(source)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn anchors_paths_at_base_dir() {
        let config = load_config_from_str(
            r#"
[routing]
format = "json"

[[files]]
path = "src/a.x"
output = "out/a.json"

[[files]]
path = "src/b.x"
format = "text"
"#,
        )
        .unwrap();

        let routes = resolve_routes(&config, Path::new("/proj"));
        assert_eq!(
            routes,
            vec![
                ResolvedRoute {
                    identifier: "src/a.x".to_string(),
                    input: PathBuf::from("/proj/src/a.x"),
                    output: Some(PathBuf::from("/proj/out/a.json")),
                    format: OutputFormat::Json,
                },
                ResolvedRoute {
                    identifier: "src/b.x".to_string(),
                    input: PathBuf::from("/proj/src/b.x"),
                    output: None,
                    format: OutputFormat::Text,
                },
            ]
        );
    }

    #[test]
    fn absolute_paths_kept() {
        let config = load_config_from_str(
            r#"
[[files]]
path = "/abs/main.x"
output = "/tmp/main.diag"
"#,
        )
        .unwrap();
        let routes = resolve_routes(&config, Path::new("/proj"));
        assert_eq!(routes[0].input, PathBuf::from("/abs/main.x"));
        assert_eq!(routes[0].output, Some(PathBuf::from("/tmp/main.diag")));
    }

    #[test]
    fn resolves_extra_sources() {
        let config = load_config_from_str(
            r#"
[routing]
sources = ["lib/core.x"]
"#,
        )
        .unwrap();
        let sources = resolve_sources(&config, Path::new("/proj"));
        assert_eq!(
            sources,
            vec![("lib/core.x".to_string(), PathBuf::from("/proj/lib/core.x"))]
        );
    }
}
