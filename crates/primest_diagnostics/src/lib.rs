//! Diagnostic creation, severity management, and terminal rendering.
//!
//! Estimators never print. They report unsupported configurations and
//! degraded estimates as structured [`Diagnostic`] values into an explicit,
//! thread-safe [`DiagnosticSink`], and callers decide how to surface them
//! (for example with a [`TerminalRenderer`]).

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
