//! Import Trie
//!
//! A prefix tree over the dot-separated segments of qualified names. Each node
//! may hold an imported type (the type whose qualified name ends at that node)
//! and may be marked as an implicitly imported package.
//!
//! Children are kept in a `BTreeMap`, so a pre-order walk visits the imported
//! types in qualified-name order.

use std::collections::BTreeMap;

use immgen_common::ImportableType;

/// A node of the import trie.
#[derive(Clone, Debug, Default)]
pub struct ImportTrie {
    /// Number of segments on the path from the root (0 for the root).
    depth: usize,
    imported_type: Option<ImportableType>,
    implicit_package: bool,
    children: BTreeMap<String, ImportTrie>,
}

impl ImportTrie {
    /// Creates the root of an empty trie.
    pub fn new() -> Self {
        ImportTrie::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Gets the index of this node's segment in a split qualified name.
    ///
    /// The node for `java.util.Map` has index 2, pointing at `Map`. The root has no index.
    pub fn segment_index(&self) -> Option<usize> {
        self.depth.checked_sub(1)
    }

    pub fn imported_type(&self) -> Option<&ImportableType> {
        self.imported_type.as_ref()
    }

    pub fn is_imported_type(&self) -> bool {
        self.imported_type.is_some()
    }

    pub fn is_implicit_package(&self) -> bool {
        self.implicit_package
    }

    pub fn try_get_child(&self, segment: &str) -> Option<&ImportTrie> {
        self.children.get(segment)
    }

    pub fn get_or_add_child(&mut self, segment: &str) -> &mut ImportTrie {
        let depth = self.depth + 1;
        self.children
            .entry(segment.to_string())
            .or_insert_with(|| ImportTrie {
                depth,
                ..ImportTrie::default()
            })
    }

    /// Gets the children, ordered by segment.
    pub fn children_in_sorted_order(&self) -> impl Iterator<Item = &ImportTrie> {
        self.children.values()
    }

    pub fn set_imported_type(&mut self, imported_type: ImportableType) {
        self.imported_type = Some(imported_type);
    }

    pub fn set_implicit_package(&mut self) {
        self.implicit_package = true;
    }

    /// Adds a type at the node for its qualified name.
    pub fn insert_importable_type(&mut self, imported_type: ImportableType) {
        let node = self.follow_or_create_path(imported_type.name_segments());
        node.set_imported_type(imported_type);
    }

    /// Marks a package as implicitly imported. The unnamed package marks the root.
    pub fn insert_implicit_package(&mut self, package_name: &str) {
        let node = self.follow_or_create_path(split_name(package_name));
        node.set_implicit_package();
    }

    /// Finds the segment index of the deepest imported type on the path, or 0 if there is none.
    ///
    /// The walk stops at the first segment without a child node.
    pub fn lookup_longest_covered_prefix<'s>(
        &self,
        segments: impl IntoIterator<Item = &'s str>,
    ) -> usize {
        let mut node = self;
        let mut covered = 0;
        for segment in segments {
            match node.try_get_child(segment) {
                Some(child) => node = child,
                None => break,
            }
            if node.is_imported_type() {
                covered = node.segment_index().unwrap_or(0);
            }
        }
        covered
    }

    /// Visits every imported type in pre-order, passing whether its parent is an implicit package.
    pub fn walk_imported_types<'t>(&'t self, visit: &mut impl FnMut(&'t ImportableType, bool)) {
        self.walk(false, visit);
    }

    fn walk<'t>(&'t self, parent_is_implicit: bool, visit: &mut impl FnMut(&'t ImportableType, bool)) {
        if let Some(imported_type) = &self.imported_type {
            visit(imported_type, parent_is_implicit);
        }
        for child in self.children.values() {
            child.walk(self.implicit_package, visit);
        }
    }

    fn follow_or_create_path<'s>(
        &mut self,
        segments: impl IntoIterator<Item = &'s str>,
    ) -> &mut ImportTrie {
        segments
            .into_iter()
            .fold(self, |node, segment| node.get_or_add_child(segment))
    }
}

/// Splits a dotted name into segments; the empty name has none.
pub(crate) fn split_name(name: &str) -> impl Iterator<Item = &str> {
    name.split('.').filter(move |_| !name.is_empty())
}

#[cfg(test)]
#[path = "../tests/trie_tests.rs"]
mod tests;
