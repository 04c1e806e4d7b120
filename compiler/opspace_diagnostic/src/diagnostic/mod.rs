//! The diagnostic value type.

use std::fmt;

use opspace_source::Position;

/// Key identifying every diagnostic this rule emits.
pub const OPERATOR_SPACING_KEY: &str = "opspace.style.operator_spacing";

/// Message attached to every diagnostic this rule emits.
pub const OPERATOR_SPACING_MESSAGE: &str =
    "Operators and control-flow keywords should be surrounded by whitespace";

/// A single style violation.
///
/// Line and column are 1-based; the column counts bytes. Two diagnostics may
/// share a position when they come from distinct failures, and no
/// deduplication is performed.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub key: &'static str,
    pub message: &'static str,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit key and message.
    pub const fn new(line: u32, column: u32, key: &'static str, message: &'static str) -> Self {
        Diagnostic {
            line,
            column,
            key,
            message,
        }
    }

    /// Create an operator-spacing diagnostic at `position`.
    pub const fn operator_spacing(position: Position) -> Self {
        Self::new(
            position.line,
            position.column,
            OPERATOR_SPACING_KEY,
            OPERATOR_SPACING_MESSAGE,
        )
    }

    /// The diagnostic's position.
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.line, self.column, self.message, self.key
        )
    }
}
