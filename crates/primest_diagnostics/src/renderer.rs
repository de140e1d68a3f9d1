//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// note[S102]: technology 22nm is not supported
///   --> class: intadder
///    = note: accepted forms: 40, "40", "40nm", 45, "45", "45nm"
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_label(&self, severity: Severity) -> String {
        if !self.color {
            return severity.to_string();
        }
        let ansi = match severity {
            Severity::Note => "36",
            Severity::Warning => "33",
        };
        format!("\x1b[1;{ansi}m{severity}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}[{}]: {}\n",
            self.severity_label(diag.severity),
            diag.code,
            diag.message
        ));

        if let Some(class_name) = &diag.class_name {
            out.push_str(&format!("  --> class: {class_name}\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;

    #[test]
    fn render_note_with_class() {
        let diag = Diagnostic::note(
            DiagnosticCode::UNSUPPORTED_TECHNOLOGY,
            "technology 22nm is not supported",
        )
        .with_class("intadder")
        .with_note("supported technologies: 40, 45");

        let output = TerminalRenderer::new(false).render(&diag);

        assert!(output.starts_with("note[S102]: technology 22nm is not supported\n"));
        assert!(output.contains("--> class: intadder"));
        assert!(output.contains("= note: supported technologies: 40, 45"));
    }

    #[test]
    fn render_without_class() {
        let diag = Diagnostic::warning(DiagnosticCode::WIRE_LENGTH_NO_UNIT, "no unit")
            .with_help("write the length as e.g. \"100um\"");

        let output = TerminalRenderer::new(false).render(&diag);

        assert!(output.contains("warning[W201]: no unit"));
        assert!(!output.contains("-->"));
        assert!(output.contains("= help: write the length as e.g. \"100um\""));
    }

    #[test]
    fn render_with_color() {
        let diag = Diagnostic::warning(DiagnosticCode::WIRE_LENGTH_BAD_UNIT, "bad unit");
        let output = TerminalRenderer::new(true).render(&diag);
        assert!(output.contains("\x1b[1;33mwarning\x1b[0m[W202]"));
    }
}
