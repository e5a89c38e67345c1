//! Type identities.
//!
//! An `ImportableType` is identified by its binary name, where `$` separates
//! nested types and `.` separates packages (e.g. `java.util.Map$Entry`).
//! Every other name is derived from the binary name once, at construction.
//!
//! `ImportableType`s are ordered by qualified name, which is the order used
//! for import declarations.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::TypeError;

const PACKAGE_SEPARATOR: char = '.';
const NESTING_SEPARATOR: char = '$';

/// Type that can be imported via an import declaration (or is implicitly imported).
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImportableType {
    binary_name: String,
    /// Same length as `binary_name`, with nesting separators replaced.
    qualified_name: String,
    /// Byte offset of the class name (0 for the unnamed package).
    class_start: usize,
    /// Byte offset of the simple name.
    simple_start: usize,
}

impl ImportableType {
    /// Creates an `ImportableType` from the type's binary name.
    pub fn new(binary_name: impl Into<String>) -> Result<Self, TypeError> {
        let binary_name = binary_name.into();
        if !is_valid_binary_name(&binary_name) {
            return Err(TypeError::InvalidBinaryName { binary_name });
        }
        Ok(Self::derive(binary_name))
    }

    /// Derives all names from a binary name that is already known to be valid.
    pub(crate) fn derive(binary_name: String) -> Self {
        let qualified_name = binary_name.replace(NESTING_SEPARATOR, ".");
        let class_start = binary_name
            .rfind(PACKAGE_SEPARATOR)
            .map_or(0, |index| index + 1);
        let simple_start = binary_name[class_start..]
            .rfind(NESTING_SEPARATOR)
            .map_or(class_start, |index| class_start + index + 1);
        Self {
            binary_name,
            qualified_name,
            class_start,
            simple_start,
        }
    }

    /// Gets the binary name.
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    /// Gets the fully qualified name.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Gets the simple name.
    pub fn simple_name(&self) -> &str {
        &self.binary_name[self.simple_start..]
    }

    /// Gets the package name, or an empty string for the unnamed package.
    pub fn package_name(&self) -> &str {
        if self.class_start == 0 {
            ""
        } else {
            &self.binary_name[..self.class_start - 1]
        }
    }

    /// Gets the class name, using `.` to delimit nested classes.
    pub fn class_name(&self) -> &str {
        &self.qualified_name[self.class_start..]
    }

    /// Splits the qualified name into its dotted segments.
    pub fn name_segments(&self) -> impl Iterator<Item = &str> {
        self.qualified_name.split(PACKAGE_SEPARATOR)
    }

    /// Determines if this type is a top-level type.
    pub fn is_top_level_type(&self) -> bool {
        !self.binary_name.contains(NESTING_SEPARATOR)
    }

    /// Gets the top-level type, or this type if it is a top-level type.
    pub fn top_level_type(&self) -> ImportableType {
        match self.binary_name.find(NESTING_SEPARATOR) {
            Some(index) => Self::derive(self.binary_name[..index].to_string()),
            None => self.clone(),
        }
    }

    /// Gets the immediately enclosing type, or `None` for a top-level type.
    pub fn enclosing_type(&self) -> Option<ImportableType> {
        self.binary_name
            .rfind(NESTING_SEPARATOR)
            .map(|index| Self::derive(self.binary_name[..index].to_string()))
    }

    /// Gets all enclosing types, innermost first.
    pub fn enclosing_types(&self) -> Vec<ImportableType> {
        let mut enclosing = Vec::new();
        let mut current = self.enclosing_type();
        while let Some(outer) = current {
            current = outer.enclosing_type();
            enclosing.push(outer);
        }
        enclosing
    }

    /// Gets the suffix of the qualified name relative to an outer type.
    ///
    /// For `java.util.Map$Entry` and the outer type `java.util.Map`, the suffix is `.Entry`.
    pub fn qualified_suffix(&self, outer_type: &ImportableType) -> Result<String, TypeError> {
        let outer = outer_type.binary_name();
        let is_outer = self.binary_name.len() > outer.len()
            && self.binary_name.starts_with(outer)
            && self.binary_name[outer.len()..].starts_with(NESTING_SEPARATOR);
        if !is_outer {
            return Err(TypeError::NotAnOuterType {
                outer: outer.to_string(),
                inner: self.binary_name.clone(),
            });
        }
        Ok(self.binary_name[outer.len()..].replace(NESTING_SEPARATOR, "."))
    }
}

fn is_valid_binary_name(binary_name: &str) -> bool {
    !binary_name.is_empty()
        && binary_name
            .split([PACKAGE_SEPARATOR, NESTING_SEPARATOR])
            .all(|segment| !segment.is_empty())
}

impl PartialEq for ImportableType {
    fn eq(&self, other: &Self) -> bool {
        self.binary_name == other.binary_name
    }
}

impl Eq for ImportableType {}

impl Hash for ImportableType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.binary_name.hash(state);
    }
}

impl Ord for ImportableType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.qualified_name
            .cmp(&other.qualified_name)
            .then_with(|| self.binary_name.cmp(&other.binary_name))
    }
}

impl PartialOrd for ImportableType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ImportableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImportableType({})", self.binary_name)
    }
}

impl fmt::Display for ImportableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

impl TryFrom<String> for ImportableType {
    type Error = TypeError;

    fn try_from(binary_name: String) -> Result<Self, Self::Error> {
        Self::new(binary_name)
    }
}

impl From<ImportableType> for String {
    fn from(type_: ImportableType) -> Self {
        type_.binary_name
    }
}

/// Raw top-level type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelType {
    package_name: String,
    simple_name: String,
}

impl TopLevelType {
    pub fn new(package_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Gets the fully qualified name of the type's package.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Gets the fully qualified name of the type.
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.simple_name)
        }
    }

    pub fn to_importable_type(&self) -> Result<ImportableType, TypeError> {
        ImportableType::new(self.qualified_name())
    }
}

impl fmt::Display for TopLevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod tests;
