//! Errors raised by source indexing.
//!
//! Every variant is a caller bug (a malformed anchor computation), never a
//! property of the file being checked.

use thiserror::Error;

/// Precondition violation while addressing the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SourceError {
    /// A 0-based line index past the last indexed line.
    #[error("line {line} is out of range (source has {line_count} lines)")]
    LineOutOfRange { line: u32, line_count: u32 },

    /// A byte offset past the end of the buffer.
    #[error("byte offset {offset} is out of range (source is {len} bytes)")]
    OffsetOutOfRange { offset: u32, len: u32 },

    /// A 1-based position with a zero component.
    #[error("invalid position {line}:{column} (lines and columns start at 1)")]
    InvalidPosition { line: u32, column: u32 },
}
