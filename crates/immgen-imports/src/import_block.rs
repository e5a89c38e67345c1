//! Package declaration and import block of a compilation unit.

use std::fmt::Write;

use immgen_common::ImportableType;

use crate::renderer::NameRenderer;

/// Renders the package declaration and the import declarations of a unit.
pub fn render(renderer: &NameRenderer) -> String {
    render_declarations(renderer.package_name(), renderer.import_declarations())
}

/// Renders a package declaration (omitted for the unnamed package) followed by one import per type.
pub fn render_declarations(package_name: &str, import_declarations: &[ImportableType]) -> String {
    let mut source = String::new();
    if !package_name.is_empty() {
        let _ = write!(source, "package {package_name};\n\n");
    }

    for imported_type in import_declarations {
        let _ = writeln!(source, "import {};", imported_type.qualified_name());
    }
    if !import_declarations.is_empty() {
        source.push('\n');
    }
    source
}

#[cfg(test)]
#[path = "../tests/import_block_tests.rs"]
mod tests;
