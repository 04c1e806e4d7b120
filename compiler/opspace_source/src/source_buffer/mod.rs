//! Immutable source buffer for one analysis pass.
//!
//! The buffer is built once per file and never mutated. Scanning addresses
//! it by absolute `u32` byte offsets; lookups past the end return `None`
//! rather than panicking, so the scanner can treat the end of the buffer as
//! end of stream.

/// Owned, immutable bytes of a single source file.
///
/// # File Size
///
/// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted, but only the
/// first `u32::MAX` bytes are addressable; [`len()`](Self::len) saturates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    buf: Box<[u8]>,
    /// Addressable length (saturated to `u32::MAX`).
    len: u32,
}

impl SourceBuffer {
    /// Create a buffer from source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer from raw bytes.
    ///
    /// The bytes need not be valid UTF-8; only ASCII bytes are ever
    /// classified.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }

    /// Returns the addressable source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Returns the byte at `offset`, or `None` past the end.
    #[inline]
    pub fn byte_at(&self, offset: u32) -> Option<u8> {
        self.as_bytes().get(offset as usize).copied()
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        SourceBuffer {
            buf: bytes.into_boxed_slice(),
            len,
        }
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
