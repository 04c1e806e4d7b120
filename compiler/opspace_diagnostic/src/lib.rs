//! Diagnostics produced by the operator-spacing rule.
//!
//! A [`Diagnostic`] is an immutable `{line, column, key, message}` record.
//! The rule never stores diagnostics itself: each one is handed to an
//! injected [`DiagnosticSink`] as soon as it is found, and the host's
//! aggregator decides what to do with it.

mod diagnostic;
pub mod queue;

pub use diagnostic::{Diagnostic, OPERATOR_SPACING_KEY, OPERATOR_SPACING_MESSAGE};
pub use queue::{DiagnosticQueue, DiagnosticSink};
