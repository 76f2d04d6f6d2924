//! Lexical errors.
//!
//! Both errors are terminal: the scanner appends one `Error` token carrying
//! the rendered message and halts. The structured [`LexError`] stays
//! available through [`Scanner::error`](crate::Scanner::error).

use std::fmt;

use crate::position::Position;

/// A lexical error and where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Start of the pending span when the error was detected.
    pub position: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// End of input while at least one form was still open.
    UnclosedParen { depth: usize },
    /// A byte inside a form that no rule accepts.
    UnrecognizedCharacter { byte: u8 },
}

impl LexError {
    /// Render as `<label>:<line>:<column>: <description>`.
    pub fn message(&self, label: &str) -> String {
        format!("{label}:{}: {}", self.position, self.kind)
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnclosedParen { depth: 1 } => {
                f.write_str("unclosed parenthesis at end of input")
            }
            Self::UnclosedParen { depth } => {
                write!(f, "{depth} unclosed parentheses at end of input")
            }
            Self::UnrecognizedCharacter { byte } if byte.is_ascii_graphic() => {
                write!(f, "unrecognized character '{}'", byte as char)
            }
            Self::UnrecognizedCharacter { byte } => {
                write!(f, "unrecognized character 0x{byte:02X}")
            }
        }
    }
}
