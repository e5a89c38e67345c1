//! Template Builder
//!
//! Folds a `TypeDescriptor` tree into a `TypeTemplate`. Unsupported kinds are
//! reported as error diagnostics against the originating element and replaced
//! with the error template, and the walk keeps going so every problem in a
//! signature is reported at once.

use immgen_common::{DiagnosticBag, ImportableType, Resolved};
use tracing::{debug, trace};

use crate::descriptor::{TypeDescriptor, TypeParameterDescriptor};
use crate::template::TypeTemplate;

/// Builds a template for a single descriptor.
pub fn build_template(descriptor: &TypeDescriptor, element: &str) -> Resolved<TypeTemplate> {
    TemplateBuilder::new(element).build(descriptor)
}

/// Recursively builds templates, collecting diagnostics for one element.
pub struct TemplateBuilder<'e> {
    /// The element diagnostics are reported against (e.g. `test.Rectangle#width`).
    element: &'e str,
    diagnostics: DiagnosticBag,
}

impl<'e> TemplateBuilder<'e> {
    pub fn new(element: &'e str) -> Self {
        TemplateBuilder {
            element,
            diagnostics: DiagnosticBag::new(),
        }
    }

    /// Builds the template for a type.
    pub fn build(mut self, descriptor: &TypeDescriptor) -> Resolved<TypeTemplate> {
        let template = self.visit(descriptor);
        self.diagnostics.finish(template)
    }

    /// Builds the declaration of a type parameter, e.g. `T extends Comparable<T>`.
    ///
    /// A lone `java.lang.Object` bound is dropped.
    pub fn build_type_parameter(
        mut self,
        type_parameter: &TypeParameterDescriptor,
    ) -> Resolved<TypeTemplate> {
        let bounds: Vec<TypeTemplate> = if type_parameter.has_bounds() {
            type_parameter
                .bounds
                .iter()
                .map(|bound| self.visit(bound))
                .collect()
        } else {
            Vec::new()
        };
        let template = TypeTemplate::type_parameter(&type_parameter.name, &bounds);
        self.diagnostics.finish(template)
    }

    fn visit(&mut self, descriptor: &TypeDescriptor) -> TypeTemplate {
        trace!(kind = descriptor.kind_name(), element = self.element, "visit type");
        match descriptor {
            TypeDescriptor::Primitive { name } => TypeTemplate::primitive(name),
            TypeDescriptor::Array { component } => {
                let component = self.visit(component);
                TypeTemplate::array(&component)
            }
            TypeDescriptor::Declared {
                binary_name,
                type_arguments,
                enclosing_type_arguments,
            } => self.visit_declared(binary_name, type_arguments, enclosing_type_arguments),
            TypeDescriptor::TypeVariable { name } => TypeTemplate::type_variable(name),
            TypeDescriptor::Wildcard {
                extends_bound,
                super_bound,
            } => match (extends_bound, super_bound) {
                (None, None) => TypeTemplate::wildcard(),
                (Some(bound), None) => {
                    let bound = self.visit(bound);
                    TypeTemplate::wildcard_extends(&bound)
                }
                (None, Some(bound)) => {
                    let bound = self.visit(bound);
                    TypeTemplate::wildcard_super(&bound)
                }
                (Some(_), Some(_)) => self.error("unexpected: wildcard with both bounds"),
            },
            TypeDescriptor::Void => self.error("void type not allowed"),
            TypeDescriptor::Error { .. } => self.error("type failed to compile"),
            TypeDescriptor::Union { .. } => self.error("unexpected: union type"),
            TypeDescriptor::Intersection { .. } => self.error("unexpected: intersection type"),
        }
    }

    fn visit_declared(
        &mut self,
        binary_name: &str,
        type_arguments: &[TypeDescriptor],
        enclosing_type_arguments: &[Vec<TypeDescriptor>],
    ) -> TypeTemplate {
        let raw_type = match ImportableType::new(binary_name) {
            Ok(raw_type) => raw_type,
            Err(err) => return self.error(err.to_string()),
        };

        let type_args = self.visit_all(type_arguments);
        let template = TypeTemplate::declared(raw_type.clone(), &type_args);

        let enclosing_types = raw_type.enclosing_types();
        if enclosing_type_arguments.len() > enclosing_types.len() {
            return self.error(format!(
                "too many enclosing type argument lists for {}",
                raw_type.qualified_name()
            ));
        }

        // Innermost enclosing type first; each step re-roots the template at the outer type.
        let mut enclosing = Vec::with_capacity(enclosing_type_arguments.len());
        for (raw_outer_type, outer_arguments) in enclosing_types.iter().zip(enclosing_type_arguments) {
            enclosing.push((raw_outer_type, self.visit_all(outer_arguments)));
        }
        let chain = enclosing
            .iter()
            .map(|(raw_outer_type, outer_args)| (*raw_outer_type, outer_args.as_slice()));
        match template.add_type_arguments_to_outer_types(chain) {
            Ok(template) => template,
            Err(err) => self.error(err.to_string()),
        }
    }

    fn visit_all(&mut self, descriptors: &[TypeDescriptor]) -> Vec<TypeTemplate> {
        descriptors.iter().map(|descriptor| self.visit(descriptor)).collect()
    }

    /// Reports an error and returns the error template.
    fn error(&mut self, message: impl Into<String>) -> TypeTemplate {
        let message = message.into();
        debug!(element = self.element, %message, "unsupported type");
        self.diagnostics.error(message, Some(self.element));
        TypeTemplate::error()
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
