//! ASCII byte classification.
//!
//! Only the ASCII whitespace set is recognised. Bytes `>= 0x80` (parts of
//! UTF-8 sequences in comments or string literals) are never whitespace.

/// Returns `true` for space, tab, newline, carriage return, vertical tab,
/// and form feed.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab (`0x0B`) is included.
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Returns `true` if `byte` terminates a line.
#[inline]
pub const fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n'
}
