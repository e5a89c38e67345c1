//! Type Qualifier
//!
//! Partitions the types referenced by a compilation unit. References are first
//! projected to their top-level types, since only top-level types are imported;
//! a nested type is then rendered through its outer type (`Map.Entry`).
//!
//! A top-level type is qualified (spelled with its fully qualified name) when:
//! - its simple name is shared with another referenced type, unless it is in
//!   the unit's package (package types shadow imports on demand)
//! - its simple name is a type variable name
//! - it is in `java.lang` and its simple name is the name of a type declared
//!   in the unit's package, whether or not that type is referenced
//!
//! Every other type is either imported or implicitly imported.

use std::collections::BTreeSet;

use immgen_common::{ConflictError, ImportableType, JAVA_LANG_PACKAGE};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::renderer::NameRenderer;

/// The resolved partition of referenced types for one compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeQualifier {
    package_name: String,
    package_types: BTreeSet<String>,
    type_variables: BTreeSet<String>,
    /// Top-level projections of the referenced types.
    referenced_types: BTreeSet<ImportableType>,
    qualified_types: BTreeSet<ImportableType>,
    imported_types: Vec<ImportableType>,
    implicit_types: BTreeSet<ImportableType>,
}

impl TypeQualifier {
    /// Resolves the referenced types of a unit in `package_name` with the given type variables in scope.
    #[tracing::instrument(level = "debug", skip_all, fields(package = package_name))]
    pub fn resolve<S: Into<String>>(
        package_name: &str,
        type_variables: impl IntoIterator<Item = S>,
        referenced_types: impl IntoIterator<Item = ImportableType>,
    ) -> Self {
        let mut qualifier = TypeQualifier {
            package_name: package_name.to_string(),
            package_types: BTreeSet::new(),
            type_variables: type_variables.into_iter().map(Into::into).collect(),
            referenced_types: referenced_types
                .into_iter()
                .map(|type_| type_.top_level_type())
                .collect(),
            qualified_types: BTreeSet::new(),
            imported_types: Vec::new(),
            implicit_types: BTreeSet::new(),
        };
        qualifier.partition();
        qualifier
    }

    /// Adds the simple names of the top-level types declared in the unit's package.
    pub fn with_package_types<S: Into<String>>(mut self, package_types: impl IntoIterator<Item = S>) -> Self {
        self.package_types
            .extend(package_types.into_iter().map(Into::into));
        self.partition();
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn package_types(&self) -> &BTreeSet<String> {
        &self.package_types
    }

    pub fn type_variables(&self) -> &BTreeSet<String> {
        &self.type_variables
    }

    /// Gets the referenced top-level types.
    pub fn referenced_types(&self) -> &BTreeSet<ImportableType> {
        &self.referenced_types
    }

    /// Gets the types that need an import declaration, in qualified-name order.
    pub fn imported_types(&self) -> &[ImportableType] {
        &self.imported_types
    }

    /// Gets the types that must be referenced by their fully qualified name.
    pub fn qualified_types(&self) -> &BTreeSet<ImportableType> {
        &self.qualified_types
    }

    /// Gets the types in `java.lang` or the unit's package that are not qualified.
    pub fn implicit_types(&self) -> &BTreeSet<ImportableType> {
        &self.implicit_types
    }

    /// Gets the types that can be referenced by their simple name.
    pub fn available_types(&self) -> impl Iterator<Item = &ImportableType> {
        self.imported_types.iter().chain(&self.implicit_types)
    }

    pub fn is_qualified(&self, type_: &ImportableType) -> bool {
        self.qualified_types.contains(&type_.top_level_type())
    }

    /// Creates the renderer for the available types.
    pub fn name_renderer(&self) -> Result<NameRenderer, ConflictError> {
        NameRenderer::new(&self.package_name, self.available_types().cloned())
    }

    fn is_implicit_package(&self, package_name: &str) -> bool {
        package_name == JAVA_LANG_PACKAGE || package_name == self.package_name
    }

    fn partition(&mut self) {
        self.qualified_types = self.collect_qualified_types();

        let (implicit, imported): (Vec<_>, Vec<_>) = self
            .referenced_types
            .iter()
            .filter(|type_| !self.qualified_types.contains(*type_))
            .cloned()
            .partition(|type_| self.is_implicit_package(type_.package_name()));
        // `referenced_types` is ordered, so the imports come out sorted.
        self.imported_types = imported;
        self.implicit_types = implicit.into_iter().collect();

        debug!(
            referenced = self.referenced_types.len(),
            imported = self.imported_types.len(),
            qualified = self.qualified_types.len(),
            implicit = self.implicit_types.len(),
            "partitioned referenced types"
        );
    }

    fn collect_qualified_types(&self) -> BTreeSet<ImportableType> {
        let mut by_simple_name: FxHashMap<&str, Vec<&ImportableType>> = FxHashMap::default();
        for type_ in &self.referenced_types {
            by_simple_name.entry(type_.simple_name()).or_default().push(type_);
        }

        // Types sharing a simple name, except those in the unit's package.
        let type_conflicts = by_simple_name
            .into_values()
            .filter(|types| types.len() > 1)
            .flatten()
            .filter(|type_| type_.package_name() != self.package_name);

        // Types shadowed by a type variable.
        let type_variable_conflicts = self
            .referenced_types
            .iter()
            .filter(|type_| self.type_variables.contains(type_.simple_name()));

        // `java.lang` types shadowed by a type in the unit's package.
        let java_lang_conflicts = self.referenced_types.iter().filter(|type_| {
            type_.package_name() == JAVA_LANG_PACKAGE
                && self.package_types.contains(type_.simple_name())
        });

        type_conflicts
            .chain(type_variable_conflicts)
            .chain(java_lang_conflicts)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/qualifier_tests.rs"]
mod tests;
