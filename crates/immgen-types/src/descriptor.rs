//! Type descriptors.
//!
//! A `TypeDescriptor` is the introspected shape of a type as seen by the host
//! compiler. Descriptors arrive as JSON, internally tagged by `kind`:
//!
//! ```json
//! {"kind": "declared", "binaryName": "java.util.List",
//!  "typeArguments": [{"kind": "declared", "binaryName": "java.lang.String"}]}
//! ```
//!
//! The set of kinds is closed; the template builder matches it exhaustively.

use immgen_common::well_known::JAVA_LANG_OBJECT;
use serde::{Deserialize, Serialize};

/// The introspected shape of a type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// `int`, `double`, ...
    Primitive { name: String },
    Array { component: Box<TypeDescriptor> },
    /// A class or interface type.
    ///
    /// `enclosing_type_arguments` holds the type arguments of the enclosing
    /// types, innermost first; an empty list marks a non-generic level.
    Declared {
        #[serde(rename = "binaryName")]
        binary_name: String,
        #[serde(rename = "typeArguments", default, skip_serializing_if = "Vec::is_empty")]
        type_arguments: Vec<TypeDescriptor>,
        #[serde(
            rename = "enclosingTypeArguments",
            default,
            skip_serializing_if = "Vec::is_empty"
        )]
        enclosing_type_arguments: Vec<Vec<TypeDescriptor>>,
    },
    TypeVariable { name: String },
    Wildcard {
        #[serde(rename = "extends", default, skip_serializing_if = "Option::is_none")]
        extends_bound: Option<Box<TypeDescriptor>>,
        #[serde(rename = "super", default, skip_serializing_if = "Option::is_none")]
        super_bound: Option<Box<TypeDescriptor>>,
    },
    /// The pseudo-type of a method without a result.
    Void,
    /// A type that failed to compile.
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Only found in catch clauses.
    Union { alternatives: Vec<TypeDescriptor> },
    /// Only found in casts.
    Intersection { bounds: Vec<TypeDescriptor> },
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive { name: name.into() }
    }

    pub fn array(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array {
            component: Box::new(component),
        }
    }

    /// A non-generic declared type.
    pub fn declared(binary_name: impl Into<String>) -> Self {
        Self::generic(binary_name, Vec::new())
    }

    pub fn generic(binary_name: impl Into<String>, type_arguments: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Declared {
            binary_name: binary_name.into(),
            type_arguments,
            enclosing_type_arguments: Vec::new(),
        }
    }

    pub fn type_variable(name: impl Into<String>) -> Self {
        TypeDescriptor::TypeVariable { name: name.into() }
    }

    pub fn wildcard() -> Self {
        TypeDescriptor::Wildcard {
            extends_bound: None,
            super_bound: None,
        }
    }

    pub fn wildcard_extends(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard {
            extends_bound: Some(Box::new(bound)),
            super_bound: None,
        }
    }

    pub fn wildcard_super(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard {
            extends_bound: None,
            super_bound: Some(Box::new(bound)),
        }
    }

    /// Get the kind name, as used in the `kind` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive { .. } => "primitive",
            TypeDescriptor::Array { .. } => "array",
            TypeDescriptor::Declared { .. } => "declared",
            TypeDescriptor::TypeVariable { .. } => "type_variable",
            TypeDescriptor::Wildcard { .. } => "wildcard",
            TypeDescriptor::Void => "void",
            TypeDescriptor::Error { .. } => "error",
            TypeDescriptor::Union { .. } => "union",
            TypeDescriptor::Intersection { .. } => "intersection",
        }
    }

    /// Check whether this is the declared type `java.lang.Object`.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Declared { binary_name, type_arguments, .. }
                if binary_name == JAVA_LANG_OBJECT.binary_name() && type_arguments.is_empty()
        )
    }
}

/// A type parameter of a generic declaration, e.g. `T extends Comparable<T>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<TypeDescriptor>,
}

impl TypeParameterDescriptor {
    pub fn new(name: impl Into<String>, bounds: Vec<TypeDescriptor>) -> Self {
        TypeParameterDescriptor {
            name: name.into(),
            bounds,
        }
    }

    pub fn unbounded(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Check whether the parameter has bounds other than the implicit `Object` bound.
    pub fn has_bounds(&self) -> bool {
        match self.bounds.as_slice() {
            [] => false,
            [bound] => !bound.is_object(),
            _ => true,
        }
    }
}
