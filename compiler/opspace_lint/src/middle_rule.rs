//! Predicates for the middle (operator) run of a scan.

/// Symbols a shift operator run may contain.
pub const SHIFT_SYMBOLS: &[u8] = b"<>";

/// Symbols a relational operator run may contain.
pub const RELATIONAL_SYMBOLS: &[u8] = b"<>=!";

/// Decides whether the current non-whitespace run is still acceptable.
///
/// Only two shapes are needed: fixed-width operators bounded by length, and
/// operator families of unbounded length built from a small alphabet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MiddleRule {
    /// Accept while the run is at most `n` bytes long.
    MaxLength(u32),
    /// Accept while each byte is in the set, whatever the run length.
    AllowedSymbols(&'static [u8]),
}

impl MiddleRule {
    /// Evaluate the rule for `byte`, the `run_len`-th byte of the run
    /// (1-based).
    #[inline]
    pub fn accepts(self, byte: u8, run_len: u32) -> bool {
        match self {
            MiddleRule::MaxLength(max) => run_len <= max,
            MiddleRule::AllowedSymbols(set) => byte.is_ascii() && set.contains(&byte),
        }
    }
}
