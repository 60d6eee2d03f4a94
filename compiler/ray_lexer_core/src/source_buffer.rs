//! Immutable input text for a scan.
//!
//! The buffer copies the input once at construction and never mutates it.
//! Reads are bounds-checked against the source length rather than relying on
//! a terminator byte: the scan buffer's cursor is allowed to run past the end
//! (`next()` at EOF still advances), so every read and slice clamps.

use std::borrow::Cow;

use crate::{Rune, EOF};

/// Owned, immutable input bytes with clamped access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Box<[u8]>,
    /// Length of the addressable source content.
    len: u32,
}

impl SourceBuffer {
    /// Create a buffer over UTF-8 source text.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`. Sources larger than `u32::MAX` bytes (~4 GiB) are
    /// accepted, but only the first `u32::MAX` bytes are addressable.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer over raw bytes. The bytes need not be valid UTF-8;
    /// text accessors decode lossily.
    pub fn from_bytes(source: &[u8]) -> Self {
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        Self {
            bytes: source.into(),
            len,
        }
    }

    /// Returns the addressable source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source content is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the byte at `pos`, or [`EOF`] at or past the end.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> Rune {
        if pos >= self.len {
            return EOF;
        }
        Some(self.bytes[pos as usize])
    }

    /// Bytes in `start..end`, with both bounds clamped to the source length.
    ///
    /// A window whose start lies past the end yields an empty slice.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        let end = end.min(self.len);
        let start = start.min(end);
        &self.bytes[start as usize..end as usize]
    }

    /// Text in `start..end` (clamped like [`slice`](Self::slice)).
    ///
    /// Borrowed when the bytes are valid UTF-8. A window that splits a
    /// multi-byte character decodes lossily.
    pub fn text(&self, start: u32, end: u32) -> Cow<'_, str> {
        String::from_utf8_lossy(self.slice(start, end))
    }
}
