//! Line-start table for offset/position conversion.
//!
//! Built in one pass over the buffer, then queried with binary search so
//! reverse lookups stay O(log L) on large files.
//!
//! # Example
//!
//! ```text
//! let index = LineIndex::build(b"a\n\nb");
//! index.line_starts()          // [0, 2, 3]
//! index.position_of(3)?        // Position { line: 3, column: 1 }
//! ```

use crate::ascii::is_line_terminator;
use crate::{Position, SourceError};

/// Byte offset of every line start, indexed by 0-based line number.
///
/// # Invariant
///
/// `starts[0] == 0` and `starts` is strictly increasing. Every line,
/// including empty ones and the (possibly empty) line after a trailing
/// newline, has exactly one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<u32>,
    /// Length of the indexed source; the end-of-buffer offset is addressable.
    source_len: u32,
}

impl LineIndex {
    /// Build the table from source bytes.
    pub fn build(source: &[u8]) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut starts = vec![0u32];
        for (i, &byte) in source.iter().take(source_len as usize).enumerate() {
            if is_line_terminator(byte) {
                // Next line starts at the byte after the terminator
                starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { starts, source_len }
    }

    /// Number of indexed lines (at least 1, even for an empty source).
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.starts.len()).unwrap_or(u32::MAX)
    }

    /// Line-start offsets in line order.
    pub fn line_starts(&self) -> &[u32] {
        &self.starts
    }

    /// Byte offset of the first byte of a 0-based line.
    pub fn offset_of_line(&self, line: u32) -> Result<u32, SourceError> {
        self.starts
            .get(line as usize)
            .copied()
            .ok_or(SourceError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            })
    }

    /// 0-based line containing `offset`.
    ///
    /// The line is the one whose start is the greatest value `<= offset`.
    /// `offset` may equal the source length (just past the last byte).
    pub fn line_of_offset(&self, offset: u32) -> Result<u32, SourceError> {
        if offset > self.source_len {
            return Err(SourceError::OffsetOutOfRange {
                offset,
                len: self.source_len,
            });
        }
        let line = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        Ok(u32::try_from(line).unwrap_or(u32::MAX))
    }

    /// 1-based position of `offset`.
    pub fn position_of(&self, offset: u32) -> Result<Position, SourceError> {
        let line = self.line_of_offset(offset)?;
        let start = self.offset_of_line(line)?;
        Ok(Position::new(line + 1, offset - start + 1))
    }

    /// Byte offset addressed by a 1-based position.
    ///
    /// The column must fall on the line itself (its terminator included);
    /// on the last line it may address the end of the buffer.
    pub fn offset_of_position(&self, position: Position) -> Result<u32, SourceError> {
        let Position { line, column } = position;
        if line == 0 || column == 0 {
            return Err(SourceError::InvalidPosition { line, column });
        }
        let start = self.offset_of_line(line - 1)?;
        let offset = start
            .checked_add(column - 1)
            .ok_or(SourceError::InvalidPosition { line, column })?;

        match self.starts.get(line as usize) {
            Some(&next) if offset >= next => Err(SourceError::InvalidPosition { line, column }),
            _ if offset > self.source_len => Err(SourceError::OffsetOutOfRange {
                offset,
                len: self.source_len,
            }),
            _ => Ok(offset),
        }
    }
}
