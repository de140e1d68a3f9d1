//! Structured diagnostic messages.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured diagnostic about a single query.
///
/// Each diagnostic carries a severity, a code, the primary message, the
/// primitive class it concerns (when known), and optional notes and help
/// text listing, for example, the values that would have been accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the kind of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The primitive class the query was about, if known.
    pub class_name: Option<String>,
    /// Explanatory footnotes.
    pub notes: Vec<String>,
    /// Actionable suggestions.
    pub help: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            class_name: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates an informational note.
    pub fn note(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Note, code, message)
    }

    /// Creates a warning.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Records the primitive class this diagnostic is about.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_note() {
        let diag = Diagnostic::note(DiagnosticCode::UNSUPPORTED_CLASS, "class not supported");
        assert_eq!(diag.severity, Severity::Note);
        assert_eq!(diag.message, "class not supported");
        assert!(diag.class_name.is_none());
    }

    #[test]
    fn create_warning() {
        let diag = Diagnostic::warning(DiagnosticCode::WIRE_LENGTH_NO_UNIT, "no unit");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(format!("{}", diag.code), "W201");
    }

    #[test]
    fn builder_methods() {
        let diag = Diagnostic::note(DiagnosticCode::SRAM_OUT_OF_RANGE, "SRAM too large")
            .with_class("SRAM")
            .with_note("width 40 exceeds 32")
            .with_help("use a dedicated SRAM estimator");
        assert_eq!(diag.class_name.as_deref(), Some("SRAM"));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn serializes_to_json() {
        let diag = Diagnostic::warning(DiagnosticCode::WIRE_LENGTH_BAD_UNIT, "bad unit")
            .with_class("wire");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "Warning");
        assert_eq!(json["class_name"], "wire");
    }
}
