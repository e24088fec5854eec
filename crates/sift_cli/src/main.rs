//! Sift CLI: replays compiler diagnostics through per-file routing.
//!
//! `sift route` reads a JSON-lines diagnostic event log, loads the inputs
//! listed in `sift.toml`, and writes each diagnostic to the output configured
//! for the file it points into.

#![warn(missing_docs)]

mod events;
mod logging;
mod pipeline;
mod route;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// File-specific diagnostic routing.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about = "File-specific diagnostic routing")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `sift.toml` configuration file or its directory.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Route a diagnostic event log to per-file outputs.
    Route(RouteArgs),
}

/// Arguments for the `sift route` subcommand.
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// JSON-lines event log to read (standard input when omitted).
    pub events: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Route(ref args) => route::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_route_from_stdin() {
        let cli = Cli::parse_from(["sift", "route"]);
        match cli.command {
            Command::Route(ref args) => assert!(args.events.is_none()),
        }
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn parse_route_with_file() {
        let cli = Cli::parse_from(["sift", "route", "build/events.jsonl"]);
        match cli.command {
            Command::Route(ref args) => {
                assert_eq!(args.events.as_deref(), Some("build/events.jsonl"));
            }
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["sift", "--quiet", "--color", "never", "route"]);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sift", "route", "-v", "--color", "always"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["sift", "--config", "/path/to/sift.toml", "route"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/sift.toml"));
    }

    #[test]
    fn missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["sift"]).is_err());
    }
}
