//! Implementation model.
//!
//! An `ImmutableImpl` is fully validated: if one exists, its source can be
//! written without errors.

use std::collections::BTreeSet;

use immgen_common::ImportableType;
use immgen_common::well_known::JAVA_LANG_OVERRIDE;
use immgen_imports::TypeQualifier;
use immgen_types::TypeTemplate;
use serde::{Deserialize, Serialize};

/// A member of the implementation: a final field and the accessor returning it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImmutableMember {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TypeTemplate,
}

impl ImmutableMember {
    pub fn new(name: impl Into<String>, type_: TypeTemplate) -> Self {
        ImmutableMember {
            name: name.into(),
            type_,
        }
    }
}

/// The implementing class, in the same package as the interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmutableType {
    /// The top-level implementation class, e.g. `test.ImmutableRectangle`.
    pub raw_impl_type: ImportableType,
    /// The class type with its type parameters, e.g. `ImmutableBox<T extends Number>`.
    pub impl_type: TypeTemplate,
    /// The interface type with its type variables, e.g. `Box<T>`.
    pub interface_type: TypeTemplate,
    #[serde(default)]
    pub type_variables: Vec<String>,
    /// Simple names of the top-level types in the package.
    #[serde(default)]
    pub package_types: BTreeSet<String>,
}

impl ImmutableType {
    /// Creates a non-generic type implementing `raw_interface_type`.
    pub fn new(raw_impl_type: ImportableType, raw_interface_type: ImportableType) -> Self {
        ImmutableType {
            impl_type: TypeTemplate::declared(raw_impl_type.clone(), &[]),
            interface_type: TypeTemplate::declared(raw_interface_type, &[]),
            raw_impl_type,
            type_variables: Vec::new(),
            package_types: BTreeSet::new(),
        }
    }

    pub fn package_name(&self) -> &str {
        self.raw_impl_type.package_name()
    }

    pub fn simple_name(&self) -> &str {
        self.raw_impl_type.simple_name()
    }

    /// Gets the qualified name of the implementation class.
    pub fn qualified_name(&self) -> &str {
        self.raw_impl_type.qualified_name()
    }
}

/// Implementation of an annotated interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableImpl {
    #[serde(rename = "type")]
    pub type_: ImmutableType,
    pub members: Vec<ImmutableMember>,
}

impl ImmutableImpl {
    pub fn new(type_: ImmutableType, members: Vec<ImmutableMember>) -> Self {
        ImmutableImpl { type_, members }
    }

    /// Gets the qualified name of the generated source.
    pub fn source_name(&self) -> &str {
        self.type_.qualified_name()
    }

    /// Gets every type referenced by the generated source.
    pub fn referenced_types(&self, generated_annotation: &ImportableType) -> BTreeSet<ImportableType> {
        let templates = [&self.type_.impl_type, &self.type_.interface_type]
            .into_iter()
            .chain(self.members.iter().map(|member| &member.type_));

        let mut referenced_types = BTreeSet::new();
        referenced_types.insert(generated_annotation.clone());
        referenced_types.insert(JAVA_LANG_OVERRIDE.clone());
        for template in templates {
            referenced_types.extend(template.args().iter().cloned());
        }
        referenced_types
    }

    /// Resolves which referenced types are imported or qualified.
    pub fn type_qualifier(&self, generated_annotation: &ImportableType) -> TypeQualifier {
        TypeQualifier::resolve(
            self.type_.package_name(),
            self.type_.type_variables.iter().cloned(),
            self.referenced_types(generated_annotation),
        )
        .with_package_types(self.type_.package_types.iter().cloned())
    }
}

#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod tests;
