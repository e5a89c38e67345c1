//! Diagnostic Infrastructure
//!
//! Diagnostics are recoverable, per-unit problems (e.g. an unsupported type
//! kind in a member signature). Resolution keeps going after a diagnostic is
//! reported, so every problem in a unit is collected in one pass.
//!
//! # Components
//!
//! - `Diagnostic` - A single message with severity and originating element
//! - `DiagnosticBag` - The diagnostics collected during one resolution pass
//! - `Resolved` - A value paired with the diagnostics reported while building it

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Diagnostic Severity
// =============================================================================

/// The severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// An error (highest severity)
    Error = 1,
    /// A warning; does not fail the unit
    Warning = 2,
}

impl DiagnosticSeverity {
    /// Get the severity name for display.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticSeverity::Error)
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A diagnostic message, attached to the element that caused it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    /// The originating element (e.g. `test.Rectangle#width`), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>, element: Option<&str>) -> Self {
        Diagnostic {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            element: element.map(str::to_string),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>, element: Option<&str>) -> Self {
        Diagnostic {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            element: element.map(str::to_string),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(element) => write!(f, "{}: {} ({})", self.severity, self.message, element),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

// =============================================================================
// DiagnosticBag
// =============================================================================

/// The diagnostics reported during one resolution pass.
///
/// A bag is owned by a single pass and never shared across units.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    /// Add a diagnostic to the bag.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error, returning `false` so checks can be written as expressions.
    pub fn error(&mut self, message: impl Into<String>, element: Option<&str>) -> bool {
        self.push(Diagnostic::error(message, element));
        false
    }

    pub fn warning(&mut self, message: impl Into<String>, element: Option<&str>) {
        self.push(Diagnostic::warning(message, element));
    }

    /// Move the diagnostics of a nested pass into this bag.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    /// Unwrap a nested result, keeping its diagnostics.
    pub fn absorb<T>(&mut self, resolved: Resolved<T>) -> T {
        self.extend(resolved.diagnostics);
        resolved.value
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Pair a value with the diagnostics collected so far.
    pub fn finish<T>(self, value: T) -> Resolved<T> {
        Resolved {
            value,
            diagnostics: self.diagnostics,
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

// =============================================================================
// Resolved
// =============================================================================

/// A value together with the diagnostics reported while building it.
///
/// When an error was reported the value may contain error markers and must
/// not be emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Resolved<T> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
