//! Lexer for a parenthesized, Lisp-like language.
//!
//! Turns source bytes into an ordered stream of [`Token`]s for a parser.
//! The scanner is a hand-written state machine that distinguishes top-level
//! text from form contents, tracks paren depth, drops `;` comments, and
//! halts on the first lexical error.
//!
//! ```
//! use paren_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("example", "; square\n(* x x)");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds.first(), Some(&TokenKind::OpenParen));
//! assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput));
//! ```
//!
//! # Errors
//!
//! Errors are not `Result`s: the scanner appends one [`TokenKind::Error`]
//! token and stops, so everything scanned before the fault stays available.
//! [`Scanner::error`] exposes the structured [`LexError`].

pub mod char_class;
mod cursor;
mod lex_error;
mod position;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use position::{LineTracker, Position};
pub use scanner::{tokenize, Scanner, State};
pub use token::{Token, TokenKind};
