//! Modeler
//!
//! Validates an `InterfaceDeclaration` and builds its `ImmutableImpl`.
//!
//! Validation reports every problem it finds as a diagnostic and keeps going,
//! so a single pass surfaces all errors in a declaration. The model is only
//! produced when no error was reported.
//!
//! # Naming
//!
//! The implementation is a top-level class in the interface's package. A
//! nested interface is first flattened (`Outer.Inner` becomes `Outer_Inner`),
//! then prefixed: `test.Outer.Inner` is implemented by `test.ImmutableOuter_Inner`.

use immgen_common::well_known::JAVA_LANG_OBJECT;
use immgen_common::{DiagnosticBag, ImportableType, Resolved, TopLevelType};
use immgen_types::{TemplateBuilder, TypeTemplate};
use tracing::{debug, warn};

use crate::declaration::{InterfaceDeclaration, MethodDeclaration};
use crate::model::{ImmutableImpl, ImmutableMember, ImmutableType};

const IMPL_PREFIX: &str = "Immutable";

/// Creates implementation models from declarations.
pub struct Modeler<'d> {
    declaration: &'d InterfaceDeclaration,
    diagnostics: DiagnosticBag,
}

impl<'d> Modeler<'d> {
    /// Creates the model for a declaration, or `None` if validation fails.
    #[tracing::instrument(level = "debug", skip_all, fields(declaration = %declaration.binary_name))]
    pub fn create(declaration: &'d InterfaceDeclaration) -> Resolved<Option<ImmutableImpl>> {
        let mut modeler = Modeler {
            declaration,
            diagnostics: DiagnosticBag::new(),
        };
        let type_ = modeler.create_type();
        let members = modeler.create_members();

        let impl_ = match type_ {
            Some(type_) if !modeler.diagnostics.has_errors() => Some(ImmutableImpl::new(type_, members)),
            _ => {
                debug!(errors = modeler.diagnostics.error_count(), "declaration failed validation");
                None
            }
        };
        modeler.diagnostics.finish(impl_)
    }

    // =========================================================================
    // Type
    // =========================================================================

    fn create_type(&mut self) -> Option<ImmutableType> {
        let raw_interface_type = self.create_raw_interface_type()?;
        let raw_impl_type = self.create_raw_impl_type(&raw_interface_type)?;

        let declaration = self.declaration;
        let mut type_variables = Vec::with_capacity(declaration.type_parameters.len());
        let mut interface_args = Vec::with_capacity(declaration.type_parameters.len());
        let mut impl_args = Vec::with_capacity(declaration.type_parameters.len());
        for type_parameter in &declaration.type_parameters {
            let resolved = TemplateBuilder::new(&declaration.binary_name).build_type_parameter(type_parameter);
            impl_args.push(self.diagnostics.absorb(resolved));
            interface_args.push(TypeTemplate::type_variable(&type_parameter.name));
            type_variables.push(type_parameter.name.clone());
        }

        Some(ImmutableType {
            impl_type: TypeTemplate::declared(raw_impl_type.clone(), &impl_args),
            interface_type: TypeTemplate::declared(raw_interface_type, &interface_args),
            raw_impl_type,
            type_variables,
            package_types: declaration.package_types.clone(),
        })
    }

    fn create_raw_interface_type(&mut self) -> Option<ImportableType> {
        if !self.declaration.kind.is_interface() {
            self.error("type must be an interface");
            return None;
        }
        if self.declaration.private {
            self.error("interface must not be privately visible");
        }

        match ImportableType::new(self.declaration.binary_name.as_str()) {
            Ok(raw_interface_type) => Some(raw_interface_type),
            Err(err) => {
                self.error(err.to_string());
                None
            }
        }
    }

    /// Creates the top-level implementation type, flattening a nested interface first.
    fn create_raw_impl_type(&mut self, raw_interface_type: &ImportableType) -> Option<ImportableType> {
        let package_name = raw_interface_type.package_name();
        let flat_name = raw_interface_type.class_name().replace('.', "_");
        if !raw_interface_type.is_top_level_type() {
            let flat_interface_type = TopLevelType::new(package_name, flat_name.as_str());
            let qualified_name = flat_interface_type.qualified_name();
            if self.declaration.immutable_types.contains(&qualified_name) {
                self.error(format!(
                    "flat interface type already exists as @Immutable type: {qualified_name}"
                ));
            }
        }

        let impl_type = TopLevelType::new(package_name, format!("{IMPL_PREFIX}{flat_name}"));
        let qualified_name = impl_type.qualified_name();
        if self.declaration.existing_types.contains(&qualified_name) {
            self.error(format!("implementation type already exists: {qualified_name}"));
        }

        match impl_type.to_importable_type() {
            Ok(raw_impl_type) => Some(raw_impl_type),
            Err(err) => {
                self.error(err.to_string());
                None
            }
        }
    }

    // =========================================================================
    // Members
    // =========================================================================

    fn create_members(&mut self) -> Vec<ImmutableMember> {
        let declaration = self.declaration;
        declaration
            .methods
            .iter()
            .filter(|method| is_method_to_implement(method))
            .map(|method| self.create_member(method))
            .collect()
    }

    fn create_member(&mut self, method: &MethodDeclaration) -> ImmutableMember {
        let element = format!("{}#{}", self.declaration.binary_name, method.name);
        if !method.parameters.is_empty() {
            self.diagnostics
                .error("method must not have parameters", Some(&element));
        }
        if !method.type_parameters.is_empty() {
            self.diagnostics
                .error("method must not have type parameters", Some(&element));
        }

        let resolved = TemplateBuilder::new(&element).build(&method.return_type);
        let type_ = self.diagnostics.absorb(resolved);
        ImmutableMember::new(method.name.as_str(), type_)
    }

    fn element(&self) -> &'d str {
        &self.declaration.binary_name
    }

    fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        let element = self.element();
        warn!(element, %message, "invalid declaration");
        self.diagnostics.error(message, Some(element));
    }
}

/// Methods declared by `java.lang.Object`, static methods and default methods are not implemented.
fn is_method_to_implement(method: &MethodDeclaration) -> bool {
    let declared_by_object = method.declaring_type.as_deref() == Some(JAVA_LANG_OBJECT.qualified_name());
    !declared_by_object && !method.is_static && !method.is_default
}

#[cfg(test)]
#[path = "../tests/modeler_tests.rs"]
mod tests;
