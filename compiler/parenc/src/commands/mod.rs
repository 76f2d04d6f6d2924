//! Command handlers for the `paren` CLI.
//!
//! Shared utilities like [`read_file`] live here in the module root.

mod lex;

pub use lex::{lex_file, lex_source, parse_lex_args, LexOptions, LexOutcome};

use crate::CliError;

/// Read a source file as raw bytes.
///
/// The lexer is byte-oriented, so no UTF-8 validation happens here.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|e| CliError::from_io(path, e))
}
