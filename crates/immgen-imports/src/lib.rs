//! Import and name resolution.
//!
//! Given every type referenced by a generated compilation unit, decides which
//! types are imported, which are implicitly available (`java.lang` and the
//! unit's own package) and which must be spelled fully qualified, then renders
//! each reference with the shortest legal name.
//!
//! ```text
//! referenced types -> TypeQualifier -> available types -> NameRenderer
//!                                                          |-> import_block::render
//!                                                          '-> TypeTemplate::render
//! ```

pub mod trie;
pub use trie::ImportTrie;

pub mod renderer;
pub use renderer::NameRenderer;

pub mod qualifier;
pub use qualifier::TypeQualifier;

pub mod import_block;
