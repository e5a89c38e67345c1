//! End-to-end generation.
//!
//! `Generator::generate` runs one declaration through the modeler and the
//! source writer. `Generator::generate_all` does the same for a batch, in
//! parallel; every unit is independent, so results come back in input order.

use std::path::PathBuf;

use immgen_common::well_known::GENERATED;
use immgen_common::{ImportableType, Resolved};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::declaration::InterfaceDeclaration;
use crate::error::GenerateError;
use crate::modeler::Modeler;
use crate::source_writer::SourceWriter;

/// Default value of the generated annotation.
pub const DEFAULT_PROCESSOR_NAME: &str = "immgen";

/// Default tag prefixed to diagnostic messages.
pub const DEFAULT_DIAGNOSTIC_TAG: &str = "@Immutable";

/// Options controlling the generated source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Value of the generated annotation, e.g. `@Generated("immgen")`.
    pub processor_name: String,
    /// Annotation placed on every generated class.
    pub generated_annotation: ImportableType,
    pub diagnostic_tag: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            processor_name: DEFAULT_PROCESSOR_NAME.to_string(),
            generated_annotation: GENERATED.clone(),
            diagnostic_tag: DEFAULT_DIAGNOSTIC_TAG.to_string(),
        }
    }
}

/// A generated compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Qualified name of the generated class.
    pub qualified_name: String,
    /// Path of the source file relative to the output directory.
    pub relative_path: PathBuf,
    pub text: String,
}

impl GeneratedSource {
    fn new(type_: &ImportableType, text: String) -> Self {
        let mut relative_path: PathBuf = type_
            .package_name()
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        relative_path.push(format!("{}.java", type_.simple_name()));
        GeneratedSource {
            qualified_name: type_.qualified_name().to_string(),
            relative_path,
            text,
        }
    }
}

/// Generates immutable implementations.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Generator { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates the source implementing one declaration.
    #[tracing::instrument(level = "debug", skip_all, fields(declaration = %declaration.binary_name))]
    pub fn generate(&self, declaration: &InterfaceDeclaration) -> Result<GeneratedSource, GenerateError> {
        let Resolved { value, diagnostics } = Modeler::create(declaration);
        let Some(impl_) = value else {
            debug!(diagnostics = diagnostics.len(), "skipping source");
            return Err(GenerateError::Diagnostics {
                source_name: declaration.binary_name.clone(),
                diagnostics,
            });
        };

        let text = SourceWriter::write(&impl_, &self.options)?;
        Ok(GeneratedSource::new(&impl_.type_.raw_impl_type, text))
    }

    /// Generates the sources for a batch of declarations, in input order.
    pub fn generate_all(
        &self,
        declarations: &[InterfaceDeclaration],
    ) -> Vec<Result<GeneratedSource, GenerateError>> {
        let results: Vec<_> = declarations
            .par_iter()
            .map(|declaration| self.generate(declaration))
            .collect();
        info!(
            declarations = declarations.len(),
            generated = results.iter().filter(|result| result.is_ok()).count(),
            "generated sources"
        );
        results
    }
}

#[cfg(test)]
#[path = "../tests/generator_tests.rs"]
mod tests;
