//! Common result and error types for the primest estimator.

/// The standard result type for fallible internal operations.
///
/// `Err` indicates a broken internal invariant (a bug in primest), not a
/// caller error. Caller errors such as a query missing its technology
/// attribute have their own error types in the crates that detect them, and
/// unsupported configurations are reported through
/// [`DiagnosticSink`](primest_diagnostics) with a zero accuracy.
pub type PrimestResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in primest, not a query problem.
#[derive(Debug, thiserror::Error)]
#[error("internal estimator error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = InternalError::new("table store not initialized");
        assert_eq!(
            format!("{err}"),
            "internal estimator error: table store not initialized"
        );
    }

    #[test]
    fn err_path() {
        let r: PrimestResult<f64> = Err(InternalError::new("test error"));
        let err = r.err().unwrap();
        assert_eq!(err.message, "test error");
    }

    #[test]
    fn from_string() {
        let err: InternalError = "from string".to_string().into();
        assert_eq!(err.message, "from string");
    }
}
