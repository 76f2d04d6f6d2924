//! The scanner state machine.
//!
//! The scanner is an explicit state tag plus one transition method per
//! state. Each transition consumes input through the [`Cursor`], may emit at
//! most one token, and returns the next state. Driving stops at
//! [`State::Halted`], which is reached exactly once per run, right after the
//! terminal token (`EndOfInput` or `Error`) is queued.
//!
//! ```text
//! TopLevelText      '(' emit OpenParen -> OpenParenFollowup, ';' -> CommentBody
//! OpenParenFollowup ';' peeked -> CommentBody, else -> InsideParens
//! InsideParens      ws -> SpaceRun, ident -> IdentifierRun, '(' / ')' emit,
//!                   ';' -> CommentBody, anything else -> error
//! SpaceRun          retreat, emit Space -> InsideParens
//! IdentifierRun     retreat, emit Identifier -> InsideParens
//! CommentBody       -> InsideParens or TopLevelText, by depth
//! ```
//!
//! Tokens are queued as they are emitted and handed out through the
//! [`Iterator`] impl, so a caller may pull them one at a time or use
//! [`Scanner::run`] to collect the whole stream.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::char_class::{
    is_close_delimiter, is_comment_start, is_end_of_line, is_identifier_char, is_open_delimiter,
    is_space,
};
use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};
use crate::position::LineTracker;
use crate::token::{Token, TokenKind};

/// Scanner state tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Between forms. Bytes other than `(` and `;` are skipped without a token.
    TopLevelText,
    /// Inside a `;` comment, up to the line terminator.
    CommentBody,
    /// Right after an emitted `(`.
    OpenParenFollowup,
    /// Inside a form, between tokens.
    InsideParens,
    /// Inside a whitespace run within a form.
    SpaceRun,
    /// Inside an identifier.
    IdentifierRun,
    /// Terminal. No further transitions.
    Halted,
}

/// Lexer for one input buffer.
pub struct Scanner {
    /// Diagnostic name of the input, used only in error messages.
    label: String,
    cursor: Cursor,
    lines: LineTracker,
    state: State,
    paren_depth: usize,
    /// Emitted tokens not yet handed out.
    emitted: VecDeque<Token>,
    error: Option<LexError>,
}

impl Scanner {
    /// Create a scanner over a copy of `input`.
    pub fn new(label: impl Into<String>, input: impl AsRef<[u8]>) -> Self {
        Self {
            label: label.into(),
            cursor: Cursor::new(input.as_ref()),
            lines: LineTracker::new(),
            state: State::TopLevelText,
            paren_depth: 0,
            emitted: VecDeque::new(),
            error: None,
        }
    }

    /// Drive the state machine to [`State::Halted`] and return every token.
    ///
    /// The last token is always `EndOfInput` or `Error`.
    #[tracing::instrument(level = "debug", skip_all, fields(label = %self.label))]
    pub fn run(mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            count = tokens.len(),
            depth = self.paren_depth,
            failed = self.error.is_some(),
            "scan halted"
        );
        tokens
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of currently open forms.
    pub fn paren_depth(&self) -> usize {
        self.paren_depth
    }

    /// The error that halted the scanner, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Run one transition.
    fn step(&mut self) {
        let next = match self.state {
            State::TopLevelText => self.top_level_text(),
            State::CommentBody => self.comment_body(),
            State::OpenParenFollowup => self.open_paren_followup(),
            State::InsideParens => self.inside_parens(),
            State::SpaceRun => self.space_run(),
            State::IdentifierRun => self.identifier_run(),
            State::Halted => State::Halted,
        };
        if next != self.state {
            trace!(from = ?self.state, to = ?next, pos = self.cursor.pos(), depth = self.paren_depth);
        }
        self.state = next;
    }

    // ─── Transitions ───────────────────────────────────────────────

    fn top_level_text(&mut self) -> State {
        match self.cursor.advance() {
            None => self.end_of_input(),
            Some(b) if is_comment_start(b) => State::CommentBody,
            Some(b) if is_open_delimiter(b) => self.open_paren(),
            // Skipped bytes stay in the pending span.
            Some(_) => State::TopLevelText,
        }
    }

    fn comment_body(&mut self) -> State {
        self.cursor.eat_until_end_of_line();
        if self.cursor.advance().is_none() {
            self.cursor.ignore();
            return self.end_of_input();
        }
        self.cursor.eat_while(is_end_of_line);
        self.cursor.ignore();
        if self.paren_depth > 0 {
            State::InsideParens
        } else {
            State::TopLevelText
        }
    }

    fn open_paren_followup(&mut self) -> State {
        match self.cursor.peek() {
            Some(b) if is_comment_start(b) => State::CommentBody,
            _ => State::InsideParens,
        }
    }

    fn inside_parens(&mut self) -> State {
        debug_assert!(self.paren_depth > 0, "InsideParens with depth 0");
        match self.cursor.advance() {
            None => self.end_of_input(),
            Some(b) if is_comment_start(b) => State::CommentBody,
            Some(b) if is_space(b) => State::SpaceRun,
            Some(b) if is_open_delimiter(b) => self.open_paren(),
            Some(b) if is_close_delimiter(b) => self.close_paren(),
            Some(b) if is_identifier_char(b) => State::IdentifierRun,
            Some(byte) => self.fail(LexErrorKind::UnrecognizedCharacter { byte }),
        }
    }

    fn space_run(&mut self) -> State {
        match self.cursor.advance() {
            Some(b) if is_space(b) => State::SpaceRun,
            None => {
                // A run cut off by end of input is not a token.
                self.cursor.ignore();
                self.end_of_input()
            }
            Some(_) => {
                self.cursor.retreat();
                self.emit(TokenKind::Space);
                State::InsideParens
            }
        }
    }

    fn identifier_run(&mut self) -> State {
        match self.cursor.advance() {
            Some(b) if is_identifier_char(b) => State::IdentifierRun,
            None => {
                self.emit(TokenKind::Identifier);
                State::InsideParens
            }
            Some(_) => {
                self.cursor.retreat();
                self.emit(TokenKind::Identifier);
                State::InsideParens
            }
        }
    }

    // ─── Shared actions ────────────────────────────────────────────

    fn open_paren(&mut self) -> State {
        self.emit(TokenKind::OpenParen);
        self.paren_depth += 1;
        State::OpenParenFollowup
    }

    fn close_paren(&mut self) -> State {
        self.emit(TokenKind::CloseParen);
        self.paren_depth -= 1;
        if self.paren_depth == 0 {
            State::TopLevelText
        } else {
            State::InsideParens
        }
    }

    /// End of input reached: a clean halt at depth 0, otherwise an unclosed form.
    fn end_of_input(&mut self) -> State {
        if self.paren_depth > 0 {
            return self.fail(LexErrorKind::UnclosedParen {
                depth: self.paren_depth,
            });
        }
        self.emit(TokenKind::EndOfInput);
        State::Halted
    }

    /// Queue a token covering the pending span.
    fn emit(&mut self, kind: TokenKind) {
        let (start, text) = self.cursor.take_pending();
        let text = text.to_vec();
        let position = self.lines.position_at(self.cursor.input(), start);
        self.emitted.push_back(Token {
            kind,
            text,
            position,
        });
    }

    /// Queue the error token and halt.
    fn fail(&mut self, kind: LexErrorKind) -> State {
        let position = self
            .lines
            .position_at(self.cursor.input(), self.cursor.token_start());
        let error = LexError { kind, position };
        let message = error.message(&self.label);
        debug!(%message, "lexical error");
        self.emitted
            .push_back(Token::new(TokenKind::Error, message, position));
        self.error = Some(error);
        State::Halted
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.emitted.pop_front() {
                return Some(token);
            }
            if self.state == State::Halted {
                return None;
            }
            self.step();
        }
    }
}

impl std::iter::FusedIterator for Scanner {}

/// Scan `input` to completion.
///
/// For pull-style access, construct a [`Scanner`] and iterate it.
pub fn tokenize(label: &str, input: impl AsRef<[u8]>) -> Vec<Token> {
    Scanner::new(label, input).run()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
