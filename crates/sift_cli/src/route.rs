//! `sift route`: replay a diagnostic event log through the file router.
//!
//! 1. Find the project root and load `sift.toml`
//! 2. Load every routed input and extra source into the source database
//! 3. Create one consumer per routed file (plus the stderr fallback)
//! 4. Feed every event to the router in order
//! 5. Finish all consumers and report whether any error was routed

use std::fs::File;
use std::io::{self, BufReader};

use sift_config::{resolve_routes, resolve_sources};
use sift_diagnostics::{DiagnosticConsumer, DiagnosticKind};

use crate::events::{read_events, Event};
use crate::pipeline::{build_router, load_sources, resolve_project_root};
use crate::{GlobalArgs, RouteArgs};

/// Runs the `sift route` command.
///
/// Returns exit code 0 if no consumer reported an error, 1 otherwise.
pub fn run(args: &RouteArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = sift_config::load_config(&project_dir)?;
    let color = global.color || config.routing.color;

    let routes = resolve_routes(&config, &project_dir);
    let extra_sources = resolve_sources(&config, &project_dir);
    let db = load_sources(&routes, &extra_sources)?;

    let events = match &args.events {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("failed to open {path}: {e}"))?;
            read_events(BufReader::new(file))?
        }
        None => read_events(io::stdin().lock())?,
    };

    let mut router = build_router(&config, &routes, color)?;
    for event in &events {
        router.handle_diagnostic(&db, &event.to_diagnostic(&db));
    }
    let had_error = router.finish();

    if !global.quiet {
        let (errors, warnings) = count_primaries(&events);
        eprintln!(
            "   Routed {} diagnostic(s) to {} destination(s): {} error(s), {} warning(s)",
            events.len(),
            router.len(),
            errors,
            warnings
        );
    }

    Ok(if had_error { 1 } else { 0 })
}

fn count_primaries(events: &[Event]) -> (usize, usize) {
    let errors = events
        .iter()
        .filter(|e| e.kind == DiagnosticKind::Error)
        .count();
    let warnings = events
        .iter()
        .filter(|e| e.kind == DiagnosticKind::Warning)
        .count();
    (errors, warnings)
}
