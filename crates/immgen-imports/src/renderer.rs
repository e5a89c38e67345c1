//! Name Renderer
//!
//! Renders references to types with the shortest legal name, given the set of
//! types that are available (imported or implicitly imported) in a
//! compilation unit:
//!
//! - `java.util.Map` renders as `Map` when `java.util.Map` is available
//! - `java.util.Map.Entry` renders as `Map.Entry` when only `java.util.Map` is available
//! - anything else renders fully qualified
//!
//! The available types must have distinct simple names. `TypeQualifier`
//! computes such a set; construction fails with `ConflictError` otherwise.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use immgen_common::{ConflictError, ImportableType, JAVA_LANG_PACKAGE};
use immgen_types::TypeNamer;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::trie::ImportTrie;

/// Renders type names for one compilation unit.
#[derive(Clone, Debug)]
pub struct NameRenderer {
    package_name: String,
    trie: ImportTrie,
    import_declarations: Vec<ImportableType>,
    implicitly_imported_types: BTreeSet<ImportableType>,
}

impl NameRenderer {
    /// Creates a renderer from the unit's package name and its available types.
    ///
    /// Available types include implicitly imported types. A type that must be
    /// spelled fully qualified (e.g. a `java.lang` type shadowed by a type
    /// variable) must not be included.
    pub fn new(
        package_name: &str,
        available_types: impl IntoIterator<Item = ImportableType>,
    ) -> Result<Self, ConflictError> {
        let available_types: BTreeSet<ImportableType> = available_types.into_iter().collect();
        check_no_conflicting_imports(&available_types)?;

        let mut trie = ImportTrie::new();
        for available_type in available_types {
            trie.insert_importable_type(available_type);
        }
        trie.insert_implicit_package(JAVA_LANG_PACKAGE);
        trie.insert_implicit_package(package_name);

        let mut import_declarations = Vec::new();
        let mut implicitly_imported_types = BTreeSet::new();
        trie.walk_imported_types(&mut |imported_type, implicit| {
            if implicit {
                implicitly_imported_types.insert(imported_type.clone());
            } else {
                import_declarations.push(imported_type.clone());
            }
        });

        Ok(NameRenderer {
            package_name: package_name.to_string(),
            trie,
            import_declarations,
            implicitly_imported_types,
        })
    }

    /// Gets the package name of the compilation unit; empty for the unnamed package.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Gets the types that need an import declaration, in qualified-name order.
    pub fn import_declarations(&self) -> &[ImportableType] {
        &self.import_declarations
    }

    /// Gets the available types that need no import declaration.
    pub fn implicitly_imported_types(&self) -> &BTreeSet<ImportableType> {
        &self.implicitly_imported_types
    }

    /// Renders the shortest legal name of a type.
    pub fn render<'a>(&self, type_: &'a ImportableType) -> &'a str {
        let qualified_name = type_.qualified_name();
        let covered = self.trie.lookup_longest_covered_prefix(type_.name_segments());
        let shortened = if covered == 0 {
            qualified_name
        } else {
            // The segment at `covered` starts after the `covered`-th dot.
            match qualified_name.match_indices('.').nth(covered - 1) {
                Some((offset, _)) => &qualified_name[offset + 1..],
                None => qualified_name,
            }
        };
        trace!(qualified_name, shortened, "render type name");
        shortened
    }
}

impl TypeNamer for NameRenderer {
    fn name<'a>(&'a self, type_: &'a ImportableType) -> Cow<'a, str> {
        Cow::Borrowed(self.render(type_))
    }
}

impl PartialEq for NameRenderer {
    fn eq(&self, other: &Self) -> bool {
        self.import_declarations == other.import_declarations
            && self.implicitly_imported_types == other.implicitly_imported_types
    }
}

impl Eq for NameRenderer {}

impl fmt::Display for NameRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImportManager{importDeclarations=")?;
        write_binary_names(f, &self.import_declarations)?;
        f.write_str(", implicitlyImportedTypes=")?;
        write_binary_names(f, &self.implicitly_imported_types)?;
        f.write_str("}")
    }
}

fn write_binary_names<'t>(
    f: &mut fmt::Formatter<'_>,
    types: impl IntoIterator<Item = &'t ImportableType>,
) -> fmt::Result {
    f.write_str("[")?;
    for (index, type_) in types.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        f.write_str(type_.binary_name())?;
    }
    f.write_str("]")
}

/// Checks that each available type has a unique simple name.
fn check_no_conflicting_imports(available_types: &BTreeSet<ImportableType>) -> Result<(), ConflictError> {
    let mut by_simple_name: FxHashMap<&str, Vec<&ImportableType>> = FxHashMap::default();
    for available_type in available_types {
        by_simple_name
            .entry(available_type.simple_name())
            .or_default()
            .push(available_type);
    }

    let conflicts: BTreeMap<String, BTreeSet<ImportableType>> = by_simple_name
        .into_iter()
        .filter(|(_, types)| types.len() > 1)
        .map(|(simple_name, types)| {
            (
                simple_name.to_string(),
                types.into_iter().cloned().collect(),
            )
        })
        .collect();
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(ConflictError { conflicts })
    }
}

#[cfg(test)]
#[path = "../tests/renderer_tests.rs"]
mod tests;
