//! Token model produced by the scanner.

use std::fmt;

use crate::position::Position;

/// Kind of a scanned token.
///
/// `repr(u8)` keeps the tag one byte wide; the discriminants are grouped so
/// control kinds sort before content kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Control ===
    /// End of input. Always the last token of a successful run.
    EndOfInput = 0,
    /// Lexical error. Always the last token of a failed run.
    Error = 1,

    // === Content ===
    Identifier = 16,
    /// Reserved. No transition produces it: digit runs lex as [`Identifier`].
    ///
    /// [`Identifier`]: TokenKind::Identifier
    Number = 17,

    // === Delimiters ===
    OpenParen = 32,
    CloseParen = 33,

    // === Trivia ===
    /// A maximal run of whitespace inside a form.
    Space = 48,
}

impl TokenKind {
    /// Name used in diagnostic rendering.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EndOfInput => "EndOfInput",
            Self::Error => "Error",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::Space => "Space",
        }
    }

    /// Returns `true` for the kinds that end a run.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::EndOfInput | Self::Error)
    }

    /// Returns `true` for tokens a parser can skip.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Space)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// For every kind except [`TokenKind::Error`], `text` is the exact input
/// slice the token covers. For errors it holds the rendered error message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Vec<u8>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Vec<u8>>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Token text as UTF-8, replacing invalid sequences.
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// Diagnostic rendering for tooling and logs. Not a wire format.
///
/// ```text
/// EOF                                   end of input
/// <message>                             error
/// Identifier "foo": line 1:3            everything else
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error => f.write_str(&self.text_lossy()),
            kind => write!(
                f,
                "{kind} {:?}: line {}",
                self.text_lossy(),
                self.position
            ),
        }
    }
}
