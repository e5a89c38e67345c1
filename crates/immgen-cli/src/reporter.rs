use colored::Colorize;

use immgen_common::{Diagnostic, DiagnosticSeverity};

/// Renders diagnostics as `<element> - error: [<tag>] <message>`.
pub struct Reporter {
    color: bool,
    tag: String,
}

impl Reporter {
    pub fn new(color: bool, tag: impl Into<String>) -> Self {
        Reporter {
            color,
            tag: tag.into(),
        }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let element = diagnostic.element.as_deref().unwrap_or("<unknown>");
        let severity = self.format_severity(diagnostic.severity);
        let tag = self.format_tag();
        format!("{element} - {severity}: {tag} {}", diagnostic.message)
    }

    /// Formats the closing summary line, e.g. `Found 2 errors in 1 declaration.`
    pub fn format_summary(&self, errors: usize, declarations: usize) -> String {
        let errors = match errors {
            1 => "1 error".to_string(),
            n => format!("{n} errors"),
        };
        let declarations = match declarations {
            1 => "1 declaration".to_string(),
            n => format!("{n} declarations"),
        };
        let summary = format!("Found {errors} in {declarations}.");
        if self.color {
            summary.bold().to_string()
        } else {
            summary
        }
    }

    fn format_severity(&self, severity: DiagnosticSeverity) -> String {
        let label = severity.name();
        if !self.color {
            return label.to_string();
        }

        match severity {
            DiagnosticSeverity::Error => label.red().bold().to_string(),
            DiagnosticSeverity::Warning => label.yellow().bold().to_string(),
        }
    }

    fn format_tag(&self) -> String {
        let tag = format!("[{}]", self.tag);
        if self.color {
            tag.bright_blue().to_string()
        } else {
            tag
        }
    }
}
