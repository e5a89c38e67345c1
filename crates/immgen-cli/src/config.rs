//! Configuration
//!
//! Options come from three layers, highest precedence first: command-line
//! flags, an `immgen.json` file, and built-in defaults.
//!
//! ```json
//! {
//!   "outDir": "build/generated",
//!   "processorName": "org.example.Processor",
//!   "generatedAnnotation": "javax.annotation.Generated",
//!   "diagnosticTag": "@Immutable"
//! }
//! ```
//!
//! A relative `outDir` in the file is resolved against the file's directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use immgen_common::ImportableType;
use immgen_emitter::GeneratorOptions;

use crate::args::CliArgs;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "immgen.json";

/// Output directory used when neither the flags nor the file name one.
pub const DEFAULT_OUT_DIR: &str = "generated";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImmgenConfig {
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub processor_name: Option<String>,
    #[serde(default)]
    pub generated_annotation: Option<String>,
    #[serde(default)]
    pub diagnostic_tag: Option<String>,
}

/// The effective configuration of a run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub out_dir: PathBuf,
    pub options: GeneratorOptions,
    /// The configuration file that was read, if any.
    pub config_path: Option<PathBuf>,
}

pub fn parse_config(source: &str) -> Result<ImmgenConfig> {
    let config = serde_json::from_str(source).context("failed to parse immgen config")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ImmgenConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read immgen config {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid immgen config {}", path.display()))
}

/// Finds the configuration file: `--config` if given, else `immgen.json` in `cwd` if present.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(cwd.join(path));
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Resolves the options of a run from the flags, the configuration file and the defaults.
pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let config_path = find_config(args, cwd);
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => ImmgenConfig::default(),
    };
    let config_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(cwd);

    let out_dir = match (&args.out_dir, &config.out_dir) {
        (Some(out_dir), _) => cwd.join(out_dir),
        (None, Some(out_dir)) => config_dir.join(out_dir),
        (None, None) => cwd.join(DEFAULT_OUT_DIR),
    };

    let mut options = GeneratorOptions::default();
    if let Some(processor_name) = args.processor_name.as_ref().or(config.processor_name.as_ref()) {
        options.processor_name = processor_name.clone();
    }
    if let Some(annotation) = args
        .generated_annotation
        .as_ref()
        .or(config.generated_annotation.as_ref())
    {
        options.generated_annotation = ImportableType::new(annotation.as_str())
            .with_context(|| format!("invalid generated annotation '{annotation}'"))?;
    }
    if let Some(diagnostic_tag) = args.diagnostic_tag.as_ref().or(config.diagnostic_tag.as_ref()) {
        options.diagnostic_tag = diagnostic_tag.clone();
    }

    debug!(
        out_dir = %out_dir.display(),
        config = ?config_path,
        processor_name = %options.processor_name,
        "resolved configuration"
    );
    Ok(ResolvedConfig {
        out_dir,
        options,
        config_path,
    })
}
