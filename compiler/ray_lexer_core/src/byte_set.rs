//! Accept sets for [`ScanBuffer::accept`](crate::ScanBuffer::accept) and
//! [`ScanBuffer::accept_run`](crate::ScanBuffer::accept_run).
//!
//! A grammar usually spells a set as a byte string (`b"0123456789"`) or a
//! `&str` of ASCII characters. Classification predicates work too, which
//! avoids listing every letter. Membership for literal sets is a `memchr`
//! search, so long sets cost no more than short ones.

/// A finite set of bytes the scanner may consume.
///
/// [`EOF`](crate::EOF) is never a member; the scan buffer checks for it before
/// consulting the set.
pub trait ByteSet {
    /// Returns `true` if `byte` belongs to the set.
    fn matches(&self, byte: u8) -> bool;
}

/// Bytes of the string. Only meaningful for ASCII sets: a multi-byte
/// character contributes each of its bytes individually.
impl ByteSet for &str {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        memchr::memchr(byte, self.as_bytes()).is_some()
    }
}

impl ByteSet for &[u8] {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        memchr::memchr(byte, self).is_some()
    }
}

impl<const N: usize> ByteSet for &[u8; N] {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        memchr::memchr(byte, self.as_slice()).is_some()
    }
}

/// Single-byte set.
impl ByteSet for u8 {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        *self == byte
    }
}

/// Predicate set, e.g. `|b: u8| b.is_ascii_digit()`.
impl<F> ByteSet for F
where
    F: Fn(u8) -> bool,
{
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        self(byte)
    }
}
