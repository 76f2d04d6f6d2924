//! Source positions and line/column computation.
//!
//! A [`Position`] is derived entirely from a byte offset and the immutable
//! input. [`Position::compute`] rescans the prefix and is the reference
//! definition; [`LineTracker`] produces the same answer incrementally for
//! monotonically increasing offsets, which is how the scanner uses it.
//!
//! # Line breaks
//!
//! `\n`, `\r\n` and a lone `\r` each count as one line break. The column is
//! the byte distance from the byte after the most recent line break.

use std::fmt;

/// Zero-based location of a token in the source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Authoritative byte offset into the input.
    pub byte_offset: usize,
}

impl Position {
    /// Compute the position of `offset` by scanning `input[..offset]`.
    ///
    /// O(offset). Offsets past the end of the input are clamped.
    pub fn compute(input: &[u8], offset: usize) -> Self {
        let mut tracker = LineTracker::new();
        tracker.position_at(input, offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns `true` if the byte at `i` ends a line.
///
/// A `\r` immediately followed by `\n` is not a break on its own; the `\n`
/// carries it.
#[inline]
fn is_line_break(input: &[u8], i: usize) -> bool {
    match input[i] {
        b'\n' => true,
        b'\r' => input.get(i + 1) != Some(&b'\n'),
        _ => false,
    }
}

/// Forward-only line/column counter.
///
/// Each byte of the input is examined at most once across all calls, so
/// positioning every token of a run costs O(input length) in total.
#[derive(Clone, Debug, Default)]
pub struct LineTracker {
    /// Bytes before this offset have been accounted for.
    scanned: usize,
    line: usize,
    line_start: usize,
}

impl LineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of `offset`, advancing the tracker up to it.
    ///
    /// # Contract
    ///
    /// `offset` must not be smaller than the offset of the previous call.
    /// The scanner guarantees this because token starts never move back.
    pub fn position_at(&mut self, input: &[u8], offset: usize) -> Position {
        let offset = offset.min(input.len());
        debug_assert!(
            offset >= self.scanned,
            "line tracker moved backwards: {offset} < {}",
            self.scanned
        );

        let window = &input[self.scanned..offset];
        for rel in memchr::memchr2_iter(b'\n', b'\r', window) {
            let i = self.scanned + rel;
            if is_line_break(input, i) {
                self.line += 1;
                self.line_start = i + 1;
            }
        }
        self.scanned = offset;

        Position {
            line: self.line,
            column: offset - self.line_start,
            byte_offset: offset,
        }
    }
}
