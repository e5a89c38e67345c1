//! Tracing setup for the immgen binary.
//!
//! Spans follow one declaration through modeling, import resolution and
//! source writing. Nothing is logged unless a filter is configured:
//!
//! ```bash
//! # Debug output for every immgen crate, as an indented tree
//! immgen -v --log-format tree decls/
//!
//! # Explicit filter; IMMGEN_LOG takes precedence over RUST_LOG
//! IMMGEN_LOG="immgen_imports=trace" IMMGEN_LOG_FORMAT=json immgen decls/
//! ```
//!
//! All output goes to stderr, so it never mixes with sources printed by `--stdout`.

use clap::ValueEnum;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Filter applied by `--verbose` when no filter variable is set.
pub const VERBOSE_FILTER: &str =
    "immgen_cli=debug,immgen_emitter=debug,immgen_imports=debug,immgen_types=debug";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Flat text lines.
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

/// Reads `IMMGEN_LOG_FORMAT`; unknown values fall back to text.
fn format_from_env(value: Option<&str>) -> LogFormat {
    value
        .and_then(|value| LogFormat::from_str(value.trim(), true).ok())
        .unwrap_or_default()
}

/// Picks the filter directives: `IMMGEN_LOG`, then `RUST_LOG`, then the
/// verbose default. `None` disables tracing.
pub fn filter_directives(
    immgen_log: Option<String>,
    rust_log: Option<String>,
    verbose: bool,
) -> Option<String> {
    immgen_log
        .or(rust_log)
        .or_else(|| verbose.then(|| VERBOSE_FILTER.to_string()))
}

/// Picks the output format: the command-line flag wins over `IMMGEN_LOG_FORMAT`.
pub fn select_format(flag: Option<LogFormat>, env_value: Option<&str>) -> LogFormat {
    flag.unwrap_or_else(|| format_from_env(env_value))
}

/// Installs the global subscriber for this run.
pub fn init_tracing(format: Option<LogFormat>, verbose: bool) {
    let Some(directives) = filter_directives(
        std::env::var("IMMGEN_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    ) else {
        return;
    };

    let filter = EnvFilter::builder().parse_lossy(directives);
    let env_format = std::env::var("IMMGEN_LOG_FORMAT").ok();
    match select_format(format, env_format.as_deref()) {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::new(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).init();
        }
    }
}
