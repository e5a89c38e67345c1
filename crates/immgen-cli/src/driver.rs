//! Driver
//!
//! Reads declaration files, generates one source per valid declaration and
//! writes the sources under the output directory.
//!
//! Declarations that fail validation are reported and skipped; they never
//! stop the run. Unreadable inputs and name conflicts abort it. A binary name
//! declared more than once is generated from its first declaration only, in
//! input path order, and the later ones are reported as warnings.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use immgen_common::{Diagnostic, DiagnosticBag};
use immgen_emitter::{GenerateError, GeneratedSource, Generator, InterfaceDeclaration, parse_declarations};

use crate::args::CliArgs;
use crate::config::{CONFIG_FILE_NAME, ResolvedConfig, resolve_config};

/// Exit status of a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when at least one declaration reported diagnostics.
pub const EXIT_DIAGNOSTICS: i32 = 1;
/// Exit status when the run was aborted.
pub const EXIT_FATAL: i32 = 2;

/// A declaration that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub source_name: String,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default)]
pub struct GenerationResult {
    pub sources: Vec<GeneratedSource>,
    pub failures: Vec<UnitFailure>,
    /// Warnings that do not affect the exit status.
    pub warnings: Vec<Diagnostic>,
    pub emitted_files: Vec<PathBuf>,
    pub files_read: Vec<PathBuf>,
}

impl GenerationResult {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.failures.iter().flat_map(|failure| &failure.diagnostics)
    }

    pub fn exit_code(&self) -> i32 {
        if self.failures.is_empty() {
            EXIT_SUCCESS
        } else {
            EXIT_DIAGNOSTICS
        }
    }
}

/// Runs the generator with the options resolved from `args`.
pub fn generate(args: &CliArgs, cwd: &Path) -> Result<GenerationResult> {
    let config = resolve_config(args, cwd)?;
    generate_with_config(args, cwd, &config)
}

pub fn generate_with_config(args: &CliArgs, cwd: &Path, config: &ResolvedConfig) -> Result<GenerationResult> {
    let files_read = discover_inputs(&args.inputs, cwd)?;
    if files_read.is_empty() {
        bail!("no declaration files found");
    }

    let (declarations, warnings) = dedup_declarations(read_declarations(&files_read)?);
    info!(
        files = files_read.len(),
        declarations = declarations.len(),
        "read declarations"
    );

    let generator = Generator::new(config.options.clone());
    let mut result = GenerationResult {
        files_read,
        warnings,
        ..GenerationResult::default()
    };
    for outcome in generator.generate_all(&declarations) {
        match outcome {
            Ok(source) => result.sources.push(source),
            Err(GenerateError::Diagnostics {
                source_name,
                diagnostics,
            }) => {
                warn!(source = %source_name, errors = diagnostics.len(), "declaration skipped");
                result.failures.push(UnitFailure {
                    source_name,
                    diagnostics,
                });
            }
            Err(err) => return Err(err).context("failed to generate sources"),
        }
    }

    if !args.no_emit {
        result.emitted_files = write_sources(&config.out_dir, &result.sources)?;
    }
    Ok(result)
}

/// Collects the declaration files named by `inputs`.
///
/// Directories are searched recursively for `*.json` files, skipping
/// configuration files. The result is sorted and free of duplicates.
pub fn discover_inputs(inputs: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = cwd.join(input);
        if path.is_file() {
            files.push(path);
            continue;
        }
        if !path.is_dir() {
            bail!("input not found: {}", path.display());
        }

        for entry in WalkDir::new(&path).follow_links(true) {
            let entry = entry.with_context(|| format!("failed to read directory {}", path.display()))?;
            let entry_path = entry.path();
            if entry_path.is_file() && is_declaration_file(entry_path) {
                files.push(entry_path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    debug!(count = files.len(), "discovered declaration files");
    Ok(files)
}

fn is_declaration_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path.file_name().is_some_and(|name| name != CONFIG_FILE_NAME)
}

/// Reads every file in parallel; declarations keep file order, then in-file order.
fn read_declarations(files: &[PathBuf]) -> Result<Vec<(&Path, InterfaceDeclaration)>> {
    let per_file = files
        .par_iter()
        .map(|file| -> Result<Vec<(&Path, InterfaceDeclaration)>> {
            let source = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let declarations = parse_declarations(&source)
                .with_context(|| format!("invalid declaration file {}", file.display()))?;
            Ok(declarations
                .into_iter()
                .map(|declaration| (file.as_path(), declaration))
                .collect())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

/// Keeps the first declaration of each binary name.
///
/// Two declarations of one name would be written to the same output path.
fn dedup_declarations(
    declarations: Vec<(&Path, InterfaceDeclaration)>,
) -> (Vec<InterfaceDeclaration>, Vec<Diagnostic>) {
    let mut seen = FxHashSet::default();
    let mut diagnostics = DiagnosticBag::new();
    let mut unique = Vec::with_capacity(declarations.len());
    for (file, declaration) in declarations {
        if seen.insert(declaration.binary_name.clone()) {
            unique.push(declaration);
            continue;
        }

        warn!(
            declaration = %declaration.binary_name,
            file = %file.display(),
            "duplicate declaration skipped"
        );
        diagnostics.warning(
            format!("duplicate declaration of {} skipped", declaration.binary_name),
            Some(&file.display().to_string()),
        );
    }
    (unique, diagnostics.into_vec())
}

fn write_sources(out_dir: &Path, sources: &[GeneratedSource]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = sources
        .iter()
        .map(|source| out_dir.join(&source.relative_path))
        .collect();

    sources
        .par_iter()
        .zip(&paths)
        .try_for_each(|(source, path)| -> Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            std::fs::write(path, &source.text).with_context(|| format!("failed to write {}", path.display()))?;
            Ok(())
        })?;

    debug!(count = paths.len(), out_dir = %out_dir.display(), "wrote sources");
    Ok(paths)
}
