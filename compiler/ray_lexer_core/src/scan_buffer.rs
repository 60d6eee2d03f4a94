//! Token window over the input and the primitives state functions scan with.
//!
//! The buffer keeps two byte offsets: `start`, where the token being assembled
//! begins, and `pos`, the next unread byte. `start` only ever moves by being
//! set to `pos` (emit, ignore) or back to zero (reset).
//!
//! # Backtracking
//!
//! [`next`](ScanBuffer::next) remembers the offset it read from, and
//! [`backup`](ScanBuffer::backup) returns to it exactly once. Anything that
//! moves the window or the cursor by other means (emit, ignore, revert,
//! advance, reset) forgets it. A second `backup` in a row is reported as
//! [`ScanError::UnpairedBackup`] instead of silently stepping the cursor back
//! twice. To abandon a longer tentative match, use
//! [`revert`](ScanBuffer::revert).
//!
//! # Reading past the end
//!
//! `next()` at EOF still advances, so `pos` may exceed the input length.
//! That keeps `next`/`backup` pairs symmetric at the end of input. Every text
//! accessor clamps to the input, so none of them reads out of range.

use std::borrow::Cow;

use tracing::trace;

use crate::driver::{self, ScanConfig, StateFn};
use crate::{ByteSet, Rune, ScanError, SourceBuffer, Span, EOF};

/// Input text, token window, and the emitted token stream of one scan.
///
/// `K` is the grammar's token kind. The engine gives it no meaning; it is
/// stored in emission order.
#[derive(Clone, Debug)]
pub struct ScanBuffer<K> {
    source: SourceBuffer,
    /// Start of the token being assembled.
    start: u32,
    /// Next unread byte. May exceed `source.len()`.
    pos: u32,
    /// Offset before the most recent `next()`, if it may still be undone.
    unread: Option<u32>,
    tokens: Vec<K>,
    /// Clamped window of each emitted token, parallel to `tokens`.
    spans: Vec<Span>,
}

impl<K> ScanBuffer<K> {
    /// Create a scan buffer over UTF-8 text.
    pub fn new(input: &str) -> Self {
        Self::with_source(SourceBuffer::new(input))
    }

    /// Create a scan buffer over raw bytes.
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::with_source(SourceBuffer::from_bytes(input))
    }

    /// Create a scan buffer over an existing source buffer.
    pub fn with_source(source: SourceBuffer) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            unread: None,
            tokens: Vec::new(),
            spans: Vec::new(),
        }
    }

    // === Reading ===

    /// Returns the byte at `pos` without consuming it, or [`EOF`].
    #[inline]
    pub fn peek(&self) -> Rune {
        self.source.byte_at(self.pos)
    }

    /// Returns `true` if `pos` is at or past the end of the input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.peek() == EOF
    }

    /// Returns the byte at `pos` and advances past it.
    ///
    /// Advances even at [`EOF`], so a following [`backup`](Self::backup)
    /// always lands back where the read started.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "advances unconditionally at EOF, unlike Iterator::next"
    )]
    pub fn next(&mut self) -> Rune {
        let rune = self.peek();
        self.unread = Some(self.pos);
        self.pos = self.pos.saturating_add(1);
        rune
    }

    /// Undoes the most recent [`next`](Self::next).
    ///
    /// Only one read can be undone. Calling this twice in a row, or after the
    /// window or cursor moved by any other means, returns
    /// [`ScanError::UnpairedBackup`] and leaves the cursor where it is.
    pub fn backup(&mut self) -> Result<(), ScanError> {
        match self.unread.take() {
            Some(pos) => {
                debug_assert!(pos >= self.start, "backup moved before token start");
                self.pos = pos;
                Ok(())
            }
            None => Err(ScanError::UnpairedBackup { pos: self.pos }),
        }
    }

    /// Moves `pos` forward by `n` bytes without reading them.
    ///
    /// Used once lookahead has already identified a fixed-width token.
    #[inline]
    pub fn advance(&mut self, n: u32) {
        self.unread = None;
        self.pos = self.pos.saturating_add(n);
    }

    /// Alias for [`advance`](Self::advance).
    #[inline]
    pub fn skip(&mut self, n: u32) {
        self.advance(n);
    }

    // === Accepting ===

    /// Consumes the next byte if it is in `valid`.
    ///
    /// On rejection (including [`EOF`]) the cursor is left where it was.
    pub fn accept(&mut self, valid: impl ByteSet) -> bool {
        match self.next() {
            Some(b) if valid.matches(b) => true,
            _ => {
                self.unread_last();
                false
            }
        }
    }

    /// Consumes bytes while they are in `valid`.
    ///
    /// Stops at the first non-member or [`EOF`], leaving `pos` on it.
    /// Consuming nothing is fine.
    pub fn accept_run(&mut self, valid: impl ByteSet) {
        while let Some(b) = self.next() {
            if !valid.matches(b) {
                break;
            }
        }
        self.unread_last();
    }

    /// Consumes bytes while `pred` holds and returns how many were consumed.
    ///
    /// Unlike [`accept_run`](Self::accept_run) this never reads past the
    /// stopping byte, so a following [`backup`](Self::backup) is unpaired.
    pub fn accept_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let from = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.unread = None;
        self.pos - from
    }

    /// Undo the read just made by `accept`/`accept_run`. Always paired.
    fn unread_last(&mut self) {
        if let Some(pos) = self.unread.take() {
            self.pos = pos;
        }
    }

    // === Token window ===

    /// Seals `start..pos` as a token of kind `kind` and opens the next window.
    pub fn emit(&mut self, kind: K) {
        let span = self.token_span();
        trace!(start = span.start, end = span.end, "emit");
        self.tokens.push(kind);
        self.spans.push(span);
        self.start = self.pos;
        self.unread = None;
    }

    /// Discards `start..pos` without emitting (whitespace, comments).
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.unread = None;
    }

    /// Moves `pos` back to `start`, abandoning everything consumed since the
    /// last emit or ignore.
    pub fn revert(&mut self) {
        self.pos = self.start;
        self.unread = None;
    }

    /// Width of the in-progress window, `pos - start`.
    #[inline]
    pub fn token_len(&self) -> u32 {
        debug_assert!(self.pos >= self.start, "token window start past pos");
        self.pos - self.start
    }

    /// The in-progress window, clamped to the input.
    pub fn token_span(&self) -> Span {
        let len = self.source.len();
        let end = self.pos.min(len);
        Span::new(self.start.min(end), end)
    }

    /// Bytes of the in-progress window, clamped to the input.
    pub fn token_bytes(&self) -> &[u8] {
        self.source.slice(self.start, self.pos)
    }

    /// Text of the in-progress window, clamped to the input.
    ///
    /// A window that splits a multi-byte character decodes lossily.
    pub fn token_value(&self) -> Cow<'_, str> {
        self.source.text(self.start, self.pos)
    }

    // === Lifecycle ===

    /// Rewinds to the beginning of the input and clears the token stream, so
    /// the same text can be scanned again.
    pub fn reset(&mut self) {
        self.start = 0;
        self.pos = 0;
        self.unread = None;
        self.tokens.clear();
        self.spans.clear();
    }

    /// Runs the state machine from `initial` until a state returns `Ok(None)`.
    ///
    /// Equivalent to [`run`](crate::run)`(self, initial)`.
    pub fn run(&mut self, initial: StateFn<K>) -> Result<(), ScanError> {
        driver::run(self, initial)
    }

    /// Like [`run`](Self::run) with explicit driver configuration.
    pub fn run_with(&mut self, initial: StateFn<K>, config: ScanConfig) -> Result<(), ScanError> {
        driver::Driver::new(config).run(self, initial)
    }

    // === Accessors ===

    /// Start of the in-progress window.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Read position. May exceed [`len`](Self::len) after reads at EOF.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.source.len()
    }

    /// Returns `true` if the input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The input being scanned.
    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    /// Emitted token kinds, in emission order.
    pub fn tokens(&self) -> &[K] {
        &self.tokens
    }

    /// Span of each emitted token; `spans()[i]` belongs to `tokens()[i]`.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text of the `index`-th emitted token.
    pub fn text_of(&self, index: usize) -> Option<Cow<'_, str>> {
        let span = self.spans.get(index)?;
        Some(self.source.text(span.start, span.end))
    }

    /// Consumes the buffer, returning the token stream.
    pub fn into_tokens(self) -> Vec<K> {
        self.tokens
    }
}
