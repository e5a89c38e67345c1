//! immgen: immutable implementation generator.
//!
//! Generates a Java class implementing an interface with one final field per
//! accessor method, naming every referenced type by the shortest legal name.
//!
//! ```text
//! InterfaceDeclaration --Modeler--> ImmutableImpl --TypeQualifier--> NameRenderer
//!                                         |                               |
//!                                         +-------- SourceWriter <--------+
//! ```
//!
//! The crates are re-exported here; most users only need `Generator`.

// Type identities, well-known types, errors and diagnostics
pub use immgen_common as common;
pub use immgen_common::{
    ConflictError, Diagnostic, DiagnosticBag, DiagnosticSeverity, ImportableType, Resolved,
    TopLevelType, TypeError,
};

// Type templates and the descriptor boundary
pub use immgen_types as types;
pub use immgen_types::{
    TemplateBuilder, TypeDescriptor, TypeNamer, TypeParameterDescriptor, TypeTemplate, build_template,
};

// Import resolution and name rendering
pub use immgen_imports as imports;
pub use immgen_imports::{ImportTrie, NameRenderer, TypeQualifier, import_block};

// Declarations, models and source generation
pub use immgen_emitter as emitter;
pub use immgen_emitter::{
    GenerateError, GeneratedSource, Generator, GeneratorOptions, ImmutableImpl, InterfaceDeclaration,
    MethodDeclaration, Modeler, SourceWriter, parse_declarations,
};
