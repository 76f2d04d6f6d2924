//! Driver for the paren lexer.
//!
//! Reads source files, runs [`paren_lexer::Scanner`] over them, and renders
//! the token stream. The `paren` binary is a thin argument dispatcher over
//! [`commands`].

pub mod commands;
mod error;
pub mod logging;

pub use error::CliError;
