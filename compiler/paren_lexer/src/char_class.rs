//! Byte classification for the scanner alphabet.
//!
//! The alphabet is ASCII only. Every predicate is backed by a 256-entry
//! lookup table built at compile time, so classification is a single load
//! regardless of the byte value.

/// Byte that starts a line comment.
pub const COMMENT_START: u8 = b';';
/// Opening delimiter of a form.
pub const OPEN_DELIMITER: u8 = b'(';
/// Closing delimiter of a form.
pub const CLOSE_DELIMITER: u8 = b')';

/// Punctuation allowed in identifiers in addition to ASCII alphanumerics.
///
/// These double as legal symbol names on their own (`+`, `<=`, `set!`).
pub const IDENTIFIER_PUNCTUATION: &[u8] = b"_!/+=*-<>";

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENTIFIER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z'
                | b'A'..=b'Z'
                | b'0'..=b'9'
                | b'_'
                | b'!'
                | b'/'
                | b'+'
                | b'='
                | b'*'
                | b'-'
                | b'<'
                | b'>'
        );
        i += 1;
    }
    table
};

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_SPACE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'\t' | b' ' | b'\r' | b'\n');
        i += 1;
    }
    table
};

/// Returns `true` for tab, space, carriage return, and line feed.
#[inline]
pub fn is_space(b: u8) -> bool {
    IS_SPACE_TABLE[b as usize]
}

/// Returns `true` for `\r` and `\n`.
#[inline]
pub fn is_end_of_line(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}

/// Returns `true` if `b` may appear in an identifier.
#[inline]
pub fn is_identifier_char(b: u8) -> bool {
    IS_IDENTIFIER_TABLE[b as usize]
}

#[inline]
pub fn is_comment_start(b: u8) -> bool {
    b == COMMENT_START
}

#[inline]
pub fn is_open_delimiter(b: u8) -> bool {
    b == OPEN_DELIMITER
}

#[inline]
pub fn is_close_delimiter(b: u8) -> bool {
    b == CLOSE_DELIMITER
}

#[cfg(test)]
mod tests;
