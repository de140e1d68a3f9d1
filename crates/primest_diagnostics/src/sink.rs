//! Thread-safe diagnostic accumulator shared by concurrent queries.

use crate::diagnostic::Diagnostic;
use std::sync::Mutex;

/// A thread-safe accumulator for diagnostics emitted while serving queries.
///
/// The hosting framework may issue queries from several threads against one
/// estimator; each query reports into whatever sink the caller passes.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    /// Creates a new empty diagnostic sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// Emits a diagnostic into the sink.
    pub fn emit(&self, diag: Diagnostic) {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }

    /// Returns `true` if nothing has been emitted since the last drain.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().unwrap().is_empty()
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;
    use crate::severity::Severity;

    fn make_note() -> Diagnostic {
        Diagnostic::note(DiagnosticCode::UNSUPPORTED_TECHNOLOGY, "technology 22 is not supported")
    }

    fn make_warning() -> Diagnostic {
        Diagnostic::warning(DiagnosticCode::WIRE_LENGTH_NO_UNIT, "no wire length unit")
    }

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(sink.is_empty());
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn keeps_emission_order() {
        let sink = DiagnosticSink::new();
        sink.emit(make_note());
        sink.emit(make_warning());
        assert!(!sink.is_empty());
        let severities: Vec<_> = sink.take_all().iter().map(|d| d.severity).collect();
        assert_eq!(severities, [Severity::Note, Severity::Warning]);
    }

    #[test]
    fn take_all_drains() {
        let sink = DiagnosticSink::new();
        sink.emit(make_note());
        sink.emit(make_warning());
        assert_eq!(sink.take_all().len(), 2);
        assert!(sink.take_all().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(DiagnosticSink::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    sink.emit(make_warning());
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(sink.take_all().len(), 400);
    }
}
