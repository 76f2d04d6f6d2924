//! `paren` command-line interface.

use std::process::ExitCode;

use parenc::commands::{lex_file, parse_lex_args};
use parenc::CliError;

/// Exit status for a run that ended in a lexical error.
const EXIT_LEX_ERROR: u8 = 1;
/// Exit status for usage and I/O failures.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    parenc::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::from(EXIT_USAGE);
    };

    match command.as_str() {
        "lex" => match run_lex(&args[2..]) {
            Ok(true) => ExitCode::from(EXIT_LEX_ERROR),
            Ok(false) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                if matches!(err, CliError::Usage(_)) {
                    eprintln!("Usage: paren lex <file> [--trivia] [--debug]");
                }
                ExitCode::from(EXIT_USAGE)
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("paren {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Returns `Ok(true)` when the token stream ended in an error.
fn run_lex(args: &[String]) -> Result<bool, CliError> {
    let (path, options) = parse_lex_args(args)?;
    let outcome = lex_file(&path, &options)?;
    Ok(outcome.failed)
}

fn print_usage() {
    println!("paren - lexer for a parenthesized, Lisp-like language");
    println!();
    println!("Usage: paren <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>      Tokenize a file and print the tokens");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Lex options:");
    println!("  --trivia, -t    Also print whitespace tokens");
    println!("  --debug, -d     Print tokens in debug form");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=paren_lexer=trace) for tracing output.");
}
