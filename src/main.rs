//! clex CLI
//!
//! Usage: clex <input>

use clap::Parser;
use clex::diagnostics::{Diagnostic, SourceLocation};
use clex::{LexError, Lexer, TokenKind};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version = "0.1.0")]
#[command(about = "Token dumper for a small C-like language", long_about = None)]
struct Args {
    /// Input source file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let file = args.input.to_string_lossy().to_string();

    let mut lexer = match Lexer::from_path(&args.input) {
        Ok(lexer) => lexer,
        Err(e) => {
            eprintln!(
                "{}: could not open file '{}': {}",
                "error".red().bold(),
                args.input.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    loop {
        match lexer.read_token() {
            Ok(token) if token.kind == TokenKind::EndOfFile => break,
            Ok(token) => println!("{}", token),
            Err(err) => {
                eprint!("{}", render(&err, &file));
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Turn a lexer error into a printable diagnostic.
fn render(err: &LexError, file: &str) -> Diagnostic {
    let mut diag = Diagnostic::error(err.code(), err.to_string());

    if let Some((line, column)) = err.location() {
        diag = diag.with_location(SourceLocation::new(file, line, column));
    }

    match err {
        LexError::UnterminatedString { .. } => {
            diag.with_help("add a closing '\"' before the end of the line")
        }
        LexError::MalformedNumber { .. } => {
            diag.with_help("numbers are decimal digits with at most one decimal point")
        }
        _ => diag,
    }
}
