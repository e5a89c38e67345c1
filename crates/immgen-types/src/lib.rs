//! Type templates for generated source code.
//!
//! A `TypeTemplate` is an unrendered type expression: a pattern with `%s`
//! placeholders plus the `ImportableType`s that fill them. Templates compose
//! (arrays, generics, wildcards, bounds) without deciding how each referenced
//! type is spelled; that decision is deferred to a `TypeNamer` at render time.
//!
//! - `template`: the template algebra and the `TypeNamer` trait
//! - `descriptor`: serde-friendly descriptions of host types
//! - `builder`: folds descriptors into templates, collecting diagnostics

pub mod template;
pub use template::{PLACEHOLDER, QualifiedNamer, TemplateKind, TypeNamer, TypeTemplate};

pub mod descriptor;
pub use descriptor::{TypeDescriptor, TypeParameterDescriptor};

pub mod builder;
pub use builder::{TemplateBuilder, build_template};
