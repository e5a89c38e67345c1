//! Precondition violations.
//!
//! These errors indicate that the caller composed the components incorrectly;
//! they are not recoverable per-unit conditions (see `diagnostics` for those).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::names::ImportableType;

/// Whether a `TypeError` was caused by a bad argument or by a bad receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeErrorKind {
    InvalidArgument,
    InvalidState,
}

/// Error returned by malformed type or template operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// The binary name is empty or contains an empty segment.
    InvalidBinaryName { binary_name: String },
    /// `outer` is not an enclosing type of `inner` (binary names).
    NotAnOuterType { outer: String, inner: String },
    /// The operation requires a template for a declared type.
    NotADeclaredType { pattern: String },
}

impl TypeError {
    pub fn kind(&self) -> TypeErrorKind {
        match self {
            TypeError::InvalidBinaryName { .. } | TypeError::NotAnOuterType { .. } => {
                TypeErrorKind::InvalidArgument
            }
            TypeError::NotADeclaredType { .. } => TypeErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::InvalidBinaryName { binary_name } => {
                write!(f, "invalid binary name: '{binary_name}'")
            }
            TypeError::NotAnOuterType { outer, inner } => {
                write!(f, "{outer} is not an outer type of {inner}")
            }
            TypeError::NotADeclaredType { pattern } => {
                write!(f, "not a declared type: {pattern}")
            }
        }
    }
}

impl std::error::Error for TypeError {}

/// Error returned when multiple available types have the same simple name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictError {
    /// Conflicting types, keyed by simple name.
    pub conflicts: BTreeMap<String, BTreeSet<ImportableType>>,
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("conflicting imports found:")?;
        for (simple_name, types) in &self.conflicts {
            write!(f, "\n{simple_name}: {{\n")?;
            for type_ in types {
                writeln!(f, "    {},", type_.qualified_name())?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConflictError {}
