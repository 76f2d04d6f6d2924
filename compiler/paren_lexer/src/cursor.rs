//! Byte cursor with a pending-token marker.
//!
//! The cursor owns the input and tracks two offsets: `pos`, the next byte to
//! read, and `token_start`, where the pending token began. The pending span
//! `input[token_start..pos]` is what the scanner emits or ignores.
//!
//! # Invariant
//!
//! `token_start <= pos <= input.len()` at all times.
//!
//! # Backup
//!
//! [`Cursor::retreat`] undoes exactly one [`Cursor::advance`] that returned
//! a byte. Retreating twice in a row, or after an advance that hit end of
//! input, is a programming error caught by a debug assertion.

/// Byte cursor over an owned input buffer.
#[derive(Clone, Debug)]
pub struct Cursor {
    input: Box<[u8]>,
    /// Next byte to read.
    pos: usize,
    /// Start of the pending token.
    token_start: usize,
    /// Set by an `advance()` that consumed a byte, cleared by everything else
    /// that moves `pos`.
    can_retreat: bool,
}

impl Cursor {
    pub fn new(input: impl Into<Box<[u8]>>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            token_start: 0,
            can_retreat: false,
        }
    }

    /// Consume and return the next byte, or `None` at end of input.
    ///
    /// At end of input the cursor does not move.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        if let Some(&b) = self.input.get(self.pos) {
            self.pos += 1;
            self.can_retreat = true;
            Some(b)
        } else {
            self.can_retreat = false;
            None
        }
    }

    /// Next byte without consuming it.
    ///
    /// Same result as `advance()` followed by `retreat()`, without the
    /// end-of-input special case.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Step back over the byte returned by the last `advance()`.
    #[inline]
    pub fn retreat(&mut self) {
        debug_assert!(
            self.can_retreat,
            "retreat() must directly follow an advance() that returned a byte"
        );
        debug_assert!(self.pos > self.token_start, "retreat() past token start");
        self.pos -= 1;
        self.can_retreat = false;
    }

    /// Drop the pending span: `token_start = pos`.
    #[inline]
    pub fn ignore(&mut self) {
        self.token_start = self.pos;
    }

    /// Take the pending span and start a new token at `pos`.
    ///
    /// Returns `(token_start, bytes)`.
    pub fn take_pending(&mut self) -> (usize, &[u8]) {
        let start = self.token_start;
        self.token_start = self.pos;
        (start, &self.input[start..self.pos])
    }

    /// Advance while `pred` holds for the next byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.input.get(self.pos).is_some_and(|&b| pred(b)) {
            self.pos += 1;
        }
        self.can_retreat = false;
    }

    /// Advance to the next `\r` or `\n`, or to end of input.
    ///
    /// Used to skip comment bodies.
    pub fn eat_until_end_of_line(&mut self) {
        let remaining = &self.input[self.pos..];
        self.pos += memchr::memchr2(b'\n', b'\r', remaining).unwrap_or(remaining.len());
        self.can_retreat = false;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Offset of the next byte to read.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Offset where the pending token starts.
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// The pending span `input[token_start..pos]`.
    pub fn pending(&self) -> &[u8] {
        &self.input[self.token_start..self.pos]
    }

    /// The whole input.
    pub fn input(&self) -> &[u8] {
        &self.input
    }
}
