//! Source buffers and line indexing for operator-spacing checks.
//!
//! This crate is the leaf of the opspace workspace. It owns the immutable
//! bytes of one file, classifies ASCII whitespace, and converts between
//! absolute byte offsets and the 1-based [`Position`]s reported in
//! diagnostics.
//!
//! # Conventions
//!
//! - Byte offsets are `u32`, counted from the start of the file.
//! - Line indices are 0-based inside [`LineIndex`].
//! - [`Position`] is 1-based in both line and column (columns count bytes).
//!
//! [`LineIndex::position_of`] and [`LineIndex::offset_of_position`] are the
//! only places where the two conventions meet.

pub mod ascii;
mod error;
mod line_index;
mod position;
mod source_buffer;

pub use error::SourceError;
pub use line_index::LineIndex;
pub use position::Position;
pub use source_buffer::SourceBuffer;
