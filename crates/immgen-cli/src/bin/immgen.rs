#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use immgen_cli::args::CliArgs;
use immgen_cli::config::resolve_config;
use immgen_cli::driver::{self, EXIT_FATAL};
use immgen_cli::reporter::Reporter;

fn main() {
    let args = CliArgs::parse();
    immgen_cli::tracing_config::init_tracing(args.log_format, args.verbose);

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn run(args: &CliArgs) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let config = resolve_config(args, &cwd)?;
    let result = driver::generate_with_config(args, &cwd, &config)?;

    if args.stdout {
        for source in &result.sources {
            print!("{}", source.text);
        }
    }

    let color = args
        .pretty
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let reporter = Reporter::new(color, config.options.diagnostic_tag.as_str());
    if !result.warnings.is_empty() {
        eprintln!("{}", reporter.render(&result.warnings));
    }

    if !result.failures.is_empty() {
        let diagnostics: Vec<_> = result.diagnostics().cloned().collect();
        eprintln!("{}", reporter.render(&diagnostics));
        eprintln!();
        eprintln!(
            "{}",
            reporter.format_summary(diagnostics.len(), result.failures.len())
        );
    }

    Ok(result.exit_code())
}
