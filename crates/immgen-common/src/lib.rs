//! Common types shared by the immgen crates.
//!
//! This crate provides foundational types used across all immgen crates:
//! - Type identities (`ImportableType`, `TopLevelType`)
//! - Well-known Java types and implicitly imported packages
//! - Precondition errors (`TypeError`, `ConflictError`)
//! - Per-unit diagnostics (`Diagnostic`, `DiagnosticBag`, `Resolved`)

// Type identities derived from binary names
pub mod names;
pub use names::{ImportableType, TopLevelType};

// Well-known types and packages
pub mod well_known;
pub use well_known::JAVA_LANG_PACKAGE;

// Precondition violations
pub mod errors;
pub use errors::{ConflictError, TypeError, TypeErrorKind};

// Recoverable, per-unit diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticSeverity, Resolved};
