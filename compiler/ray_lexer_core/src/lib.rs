//! State-function scanning engine.
//!
//! A grammar layer (shell, PHP-like, ...) describes its lexical rules as a set
//! of state functions. Each state function inspects and advances a
//! [`ScanBuffer`] and returns the next state to run. The [`Driver`] keeps
//! calling states until one returns `Ok(None)`.
//!
//! The buffer tracks a token window `start..pos` over the input. A state reads
//! runes with [`ScanBuffer::next`], [`ScanBuffer::accept`] and
//! [`ScanBuffer::accept_run`], then seals the window with
//! [`ScanBuffer::emit`] or discards it with [`ScanBuffer::ignore`].
//!
//! # Offsets
//!
//! All offsets are **byte** offsets and every rune is a single byte. A
//! multi-byte UTF-8 character is read as several runes. Grammars that care
//! about non-ASCII text should match its bytes explicitly or accept them with
//! a predicate (`|b| b >= 0x80`).
//!
//! # Example
//!
//! ```
//! use ray_lexer_core::{ScanBuffer, StateFn, Transition, EOF};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Kind {
//!     Word,
//!     Number,
//! }
//!
//! fn lex_any(buf: &mut ScanBuffer<Kind>) -> Transition<Kind> {
//!     if buf.peek() == EOF {
//!         return Ok(None);
//!     }
//!     buf.accept_run(|b: u8| b.is_ascii_alphabetic());
//!     if buf.token_len() > 0 {
//!         buf.emit(Kind::Word);
//!     }
//!     buf.accept_run(b"0123456789");
//!     if buf.token_len() > 0 {
//!         buf.emit(Kind::Number);
//!     }
//!     Ok(Some(StateFn::new(lex_any)))
//! }
//!
//! let mut buf = ScanBuffer::new("abc123");
//! buf.run(StateFn::new(lex_any))?;
//! assert_eq!(buf.tokens(), &[Kind::Word, Kind::Number]);
//! assert_eq!(buf.text_of(1).as_deref(), Some("123"));
//! # Ok::<(), ray_lexer_core::ScanError>(())
//! ```

mod byte_set;
mod driver;
mod error;
mod scan_buffer;
mod source_buffer;
mod span;

pub use byte_set::ByteSet;
pub use driver::{run, Driver, ScanConfig, StateFn, Transition};
pub use error::ScanError;
pub use scan_buffer::ScanBuffer;
pub use source_buffer::SourceBuffer;
pub use span::Span;

/// A single byte read from the input, or [`EOF`].
pub type Rune = Option<u8>;

/// Returned by the read primitives once the cursor is at or past the end of
/// the input. Never equal to any byte of input.
pub const EOF: Rune = None;
