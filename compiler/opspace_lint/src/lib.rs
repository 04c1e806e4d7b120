//! Operator-spacing lint rule.
//!
//! Flags places where whitespace is missing around binary operators,
//! assignments, the ternary `:` separator, variable initialisers, and
//! between control-flow keywords and their opening parenthesis.
//!
//! # Architecture
//!
//! ```text
//! external walker ──Node──▶ OperatorSpacing::check
//!                               │ rules::rule_for(category)
//!                               │ anchor via LineIndex
//!                               ▼
//!                           scanner::scan ──Violation──▶ DiagnosticSink
//! ```
//!
//! - [`scanner`]: the three-phase whitespace scanner over raw bytes.
//! - [`MiddleRule`]: the closed set of run predicates.
//! - [`rules`]: the static category → anchor → check table.
//! - [`OperatorSpacing`]: the dispatcher the tree walker calls into.
//!
//! Parsing and tree traversal are the host's job; this crate only sees
//! `(category, position)` events.

mod config;
mod dispatch;
mod error;
mod middle_rule;
pub mod rules;
pub mod scanner;

pub use config::LintConfig;
pub use dispatch::{Loc, Name, Node, OperatorSpacing, Site};
pub use error::{LintError, UnknownCategory};
pub use middle_rule::{MiddleRule, RELATIONAL_SYMBOLS, SHIFT_SYMBOLS};
pub use rules::{AnchorRule, Category, Check, RuleEntry};

// Re-exported so hosts need only one dependency.
pub use opspace_diagnostic::{Diagnostic, DiagnosticQueue, DiagnosticSink};
pub use opspace_source::{LineIndex, Position, SourceBuffer, SourceError};
