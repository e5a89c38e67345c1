use clap::Parser;
use std::path::PathBuf;

use crate::tracing_config::LogFormat;

/// CLI arguments for the immgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "immgen",
    version,
    about = "Generates immutable Java implementations of annotated interfaces"
)]
pub struct CliArgs {
    // ==================== Configuration ====================
    /// Path to an immgen.json configuration file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Output ====================
    /// Directory the generated sources are written to.
    #[arg(short = 'o', long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Print the generated sources to stdout.
    #[arg(long)]
    pub stdout: bool,

    /// Check the declarations without writing any source.
    #[arg(long = "no-emit", alias = "noEmit")]
    pub no_emit: bool,

    // ==================== Generated Code ====================
    /// Value of the generated annotation.
    #[arg(long = "processor-name", alias = "processorName", value_name = "NAME")]
    pub processor_name: Option<String>,

    /// Binary name of the annotation placed on generated classes.
    #[arg(
        long = "generated-annotation",
        alias = "generatedAnnotation",
        value_name = "TYPE"
    )]
    pub generated_annotation: Option<String>,

    /// Tag prefixed to diagnostic messages.
    #[arg(long = "diagnostic-tag", alias = "diagnosticTag", value_name = "TAG")]
    pub diagnostic_tag: Option<String>,

    // ==================== Output Formatting ====================
    /// Enable color in diagnostics.
    #[arg(long)]
    pub pretty: Option<bool>,

    // ==================== Logging ====================
    /// Log debug output of the immgen crates when no filter variable is set.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Format of log output on stderr.
    #[arg(long = "log-format", value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    // ==================== Input Files ====================
    /// Declaration files, or directories searched for `*.json` declaration files.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
}
