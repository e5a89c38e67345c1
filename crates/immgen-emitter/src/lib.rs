//! Immutable implementation generator.
//!
//! Turns an introspected interface declaration into the Java source of a
//! class implementing it with one final field per accessor method.
//!
//! - `declaration`: the serde input format (`InterfaceDeclaration`)
//! - `modeler`: validates a declaration and builds the `ImmutableImpl` model
//! - `model`: the implementation model and its referenced types
//! - `source_writer`: renders a model as Java source
//! - `generator`: end-to-end generation, single and batched

pub mod declaration;
pub use declaration::{
    DeclarationKind, InterfaceDeclaration, MethodDeclaration, ParameterDeclaration, parse_declarations,
};

pub mod model;
pub use model::{ImmutableImpl, ImmutableMember, ImmutableType};

pub mod modeler;
pub use modeler::Modeler;

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod error;
pub use error::GenerateError;

pub mod generator;
pub use generator::{GeneratedSource, Generator, GeneratorOptions};

// Declarations and models shared by the unit tests
#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
pub(crate) mod test_fixtures;
