//! Generation errors.

use std::fmt;

use immgen_common::{ConflictError, Diagnostic, TypeError};

/// Error returned when a source cannot be generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The declaration failed validation.
    Diagnostics {
        /// Binary name of the declaration.
        source_name: String,
        diagnostics: Vec<Diagnostic>,
    },
    /// Two available types share a simple name.
    Conflict(ConflictError),
    /// A template or name operation was given malformed input.
    Type(TypeError),
}

impl GenerateError {
    /// Gets the diagnostics reported for the declaration, if validation failed.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            GenerateError::Diagnostics { diagnostics, .. } => diagnostics,
            GenerateError::Conflict(_) | GenerateError::Type(_) => &[],
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Diagnostics {
                source_name,
                diagnostics,
            } => write!(
                f,
                "{source_name}: {} error(s) reported",
                diagnostics.iter().filter(|d| d.is_error()).count()
            ),
            GenerateError::Conflict(err) => write!(f, "{err}"),
            GenerateError::Type(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Diagnostics { .. } => None,
            GenerateError::Conflict(err) => Some(err),
            GenerateError::Type(err) => Some(err),
        }
    }
}

impl From<ConflictError> for GenerateError {
    fn from(err: ConflictError) -> Self {
        GenerateError::Conflict(err)
    }
}

impl From<TypeError> for GenerateError {
    fn from(err: TypeError) -> Self {
        GenerateError::Type(err)
    }
}
