//! Interface declarations.
//!
//! The introspected form of an annotated interface, as produced by a host
//! compiler and read from JSON:
//!
//! ```json
//! {
//!   "binaryName": "test.Rectangle",
//!   "methods": [
//!     {"name": "width", "returnType": {"kind": "primitive", "name": "double"}},
//!     {"name": "area", "returnType": {"kind": "primitive", "name": "double"}, "default": true}
//!   ],
//!   "packageTypes": ["Rectangle"]
//! }
//! ```

use std::collections::BTreeSet;

use immgen_types::{TypeDescriptor, TypeParameterDescriptor};
use serde::{Deserialize, Serialize};

/// The kind of a type declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    #[default]
    Interface,
    Class,
    Enum,
    Record,
    Annotation,
}

impl DeclarationKind {
    /// Annotation types are interfaces too.
    pub fn is_interface(self) -> bool {
        matches!(self, DeclarationKind::Interface | DeclarationKind::Annotation)
    }
}

/// An annotated type declaration to implement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDeclaration {
    /// Binary name, e.g. `test.Outer$Inner`.
    pub binary_name: String,
    #[serde(default)]
    pub kind: DeclarationKind,
    /// Whether the type, or any type enclosing it, is private.
    #[serde(default)]
    pub private: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameterDescriptor>,
    /// All member methods, including inherited ones.
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
    /// Simple names of the top-level types declared in the package.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub package_types: BTreeSet<String>,
    /// Qualified names of types that already exist in the compilation.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub existing_types: BTreeSet<String>,
    /// Qualified names of existing types that are annotated for generation.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub immutable_types: BTreeSet<String>,
}

impl InterfaceDeclaration {
    /// Creates a declaration of a public, non-generic interface without methods.
    pub fn new(binary_name: impl Into<String>) -> Self {
        InterfaceDeclaration {
            binary_name: binary_name.into(),
            kind: DeclarationKind::Interface,
            private: false,
            type_parameters: Vec::new(),
            methods: Vec::new(),
            package_types: BTreeSet::new(),
            existing_types: BTreeSet::new(),
            immutable_types: BTreeSet::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_type_parameter(mut self, type_parameter: TypeParameterDescriptor) -> Self {
        self.type_parameters.push(type_parameter);
        self
    }

    pub fn with_package_types<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.package_types.extend(names.into_iter().map(Into::into));
        self
    }
}

/// A member method of a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    pub name: String,
    pub return_type: TypeDescriptor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameterDescriptor>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(rename = "default", default)]
    pub is_default: bool,
    /// Qualified name of the declaring type, when inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<String>,
}

impl MethodDeclaration {
    /// Creates an abstract accessor method.
    pub fn accessor(name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        MethodDeclaration {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            is_static: false,
            is_default: false,
            declaring_type: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TypeDescriptor,
}

/// Parses a JSON document holding one declaration or an array of declarations.
pub fn parse_declarations(json: &str) -> serde_json::Result<Vec<InterfaceDeclaration>> {
    // An array holds several declarations.
    if json.trim_start().starts_with('[') {
        serde_json::from_str(json)
    } else {
        serde_json::from_str(json).map(|declaration| vec![declaration])
    }
}

#[cfg(test)]
#[path = "../tests/declaration_tests.rs"]
mod tests;
