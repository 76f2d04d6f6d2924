//! `paren lex`: tokenize a file and print the stream.

use std::fmt::Write as _;

use paren_lexer::{Scanner, Token, TokenKind};
use tracing::debug;

use super::read_file;
use crate::CliError;

/// Options for the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Print `Space` tokens too.
    pub trivia: bool,
    /// Print the `Debug` form of each token instead of the diagnostic form.
    pub debug: bool,
}

/// How a lex run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutcome {
    /// Rendered tokens, one per line.
    pub rendered: String,
    /// Number of tokens the scanner produced, trivia included.
    pub token_count: usize,
    /// `true` when the run ended in an `Error` token.
    pub failed: bool,
}

/// Parse the arguments after `lex`: one path plus flags in any order.
pub fn parse_lex_args(args: &[String]) -> Result<(String, LexOptions), CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--trivia" | "-t" => options.trivia = true,
            "--debug" | "-d" => options.debug = true,
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            file if path.is_none() => path = Some(file.to_string()),
            extra => {
                return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
            }
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("missing file path".to_string()))?;
    Ok((path, options))
}

/// Tokenize `source` and render the stream.
pub fn lex_source(label: &str, source: &[u8], options: &LexOptions) -> LexOutcome {
    let tokens = Scanner::new(label, source).run();
    let failed = tokens.last().is_some_and(|t| t.kind == TokenKind::Error);
    LexOutcome {
        rendered: render(&tokens, options),
        token_count: tokens.len(),
        failed,
    }
}

/// Lex a file and print the token stream to stdout.
#[tracing::instrument(level = "debug", skip(options))]
pub fn lex_file(path: &str, options: &LexOptions) -> Result<LexOutcome, CliError> {
    let source = read_file(path)?;
    debug!(bytes = source.len(), "read source");
    let outcome = lex_source(path, &source, options);
    print!("{}", outcome.rendered);
    Ok(outcome)
}

fn render(tokens: &[Token], options: &LexOptions) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.kind.is_trivia() && !options.trivia {
            continue;
        }
        // Writing to a String cannot fail.
        let _ = if options.debug {
            writeln!(out, "{token:?}")
        } else {
            writeln!(out, "{token}")
        };
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
