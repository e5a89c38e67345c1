//! Source Writer
//!
//! Writes the Java source of an `ImmutableImpl`:
//!
//! ```text
//! package test;
//!
//! import javax.annotation.processing.Generated;
//!
//! @Generated("immgen")
//! class ImmutableRectangle implements Rectangle {
//!
//!     private final double width;
//!
//!     ImmutableRectangle(double width) {
//!         this.width = width;
//!     }
//!
//!     @Override
//!     public double width() {
//!         return width;
//!     }
//! }
//! ```
//!
//! Every type is named through the unit's `NameRenderer`, so the source only
//! spells out a qualified name where a simple name would be ambiguous.

use immgen_common::well_known::JAVA_LANG_OVERRIDE;
use immgen_imports::{NameRenderer, import_block};
use tracing::debug;

use crate::error::GenerateError;
use crate::generator::GeneratorOptions;
use crate::model::{ImmutableImpl, ImmutableMember};

const INDENT: &str = "    ";

/// Writes the source of one implementation.
pub struct SourceWriter<'a> {
    impl_: &'a ImmutableImpl,
    renderer: NameRenderer,
    output: String,
    indent_level: u32,
}

impl<'a> SourceWriter<'a> {
    /// Writes the complete compilation unit for `impl_`.
    #[tracing::instrument(level = "debug", skip_all, fields(source = impl_.source_name()))]
    pub fn write(impl_: &'a ImmutableImpl, options: &GeneratorOptions) -> Result<String, GenerateError> {
        let renderer = impl_
            .type_qualifier(&options.generated_annotation)
            .name_renderer()?;
        let output = import_block::render(&renderer);

        let mut writer = SourceWriter {
            impl_,
            renderer,
            output,
            indent_level: 0,
        };
        writer.write_class(options)?;
        debug!(bytes = writer.output.len(), "wrote source");
        Ok(writer.output)
    }

    // =========================================================================
    // Class
    // =========================================================================

    fn write_class(&mut self, options: &GeneratorOptions) -> Result<(), GenerateError> {
        let impl_ = self.impl_;
        let type_ = &impl_.type_;
        let annotation = self.renderer.render(&options.generated_annotation);
        let declaration = type_.impl_type.top_level_declaration()?.render(&self.renderer);
        let interface = type_.interface_type.render(&self.renderer);

        self.write_str(&format!("@{annotation}(\"{}\")", options.processor_name));
        self.write_line();
        self.write_str(&format!("class {declaration} implements {interface} {{"));
        self.write_line();

        self.increase_indent();
        self.write_fields();
        self.write_constructor();
        self.write_accessors();
        self.decrease_indent();

        self.write_str("}");
        self.write_line();
        Ok(())
    }

    fn write_fields(&mut self) {
        let impl_ = self.impl_;
        let members = &impl_.members;
        if members.is_empty() {
            return;
        }

        self.write_line();
        for member in members {
            let type_ = member.type_.render(&self.renderer);
            self.write_indent();
            self.write_str(&format!("private final {type_} {};", member.name));
            self.write_line();
        }
    }

    fn write_constructor(&mut self) {
        let impl_ = self.impl_;
        let members = &impl_.members;
        let parameters = members
            .iter()
            .map(|member| format!("{} {}", member.type_.render(&self.renderer), member.name))
            .collect::<Vec<_>>()
            .join(", ");

        self.write_line();
        self.write_indent();
        self.write_str(&format!("{}({parameters}) {{", impl_.type_.simple_name()));
        self.write_line();

        self.increase_indent();
        for member in members {
            self.write_indent();
            self.write_str(&format!("this.{0} = {0};", member.name));
            self.write_line();
        }
        self.decrease_indent();

        self.write_indent();
        self.write_str("}");
        self.write_line();
    }

    fn write_accessors(&mut self) {
        let override_annotation = self.renderer.render(&JAVA_LANG_OVERRIDE);
        let impl_ = self.impl_;
        for member in &impl_.members {
            self.write_line();
            self.write_indent();
            self.write_str(&format!("@{override_annotation}"));
            self.write_line();
            self.write_accessor(member);
        }
    }

    fn write_accessor(&mut self, member: &ImmutableMember) {
        let type_ = member.type_.render(&self.renderer);
        self.write_indent();
        self.write_str(&format!("public {type_} {}() {{", member.name));
        self.write_line();

        self.increase_indent();
        self.write_indent();
        self.write_str(&format!("return {};", member.name));
        self.write_line();
        self.decrease_indent();

        self.write_indent();
        self.write_str("}");
        self.write_line();
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/source_writer_tests.rs"]
mod tests;
