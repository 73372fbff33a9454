//! Lexer error types.

use std::io;

use thiserror::Error;

use crate::diagnostics::codes;

/// Fatal lexer errors.
///
/// Every scan error carries the 1-indexed line and column where it was
/// detected. There is no recovery and no error-token kind: a malformed
/// lexeme always aborts the scan at that position.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),

    #[error("malformed number on line {line} col {column}: {reason}")]
    MalformedNumber {
        reason: NumberError,
        line: usize,
        column: usize,
    },

    #[error("missing closing quote on line {line} col {column}")]
    UnterminatedString { line: usize, column: usize },

    #[error("unexpected character '{ch}' on line {line} col {column}")]
    UnrecognizedCharacter {
        ch: char,
        line: usize,
        column: usize,
    },
}

/// What made a numeric literal malformed.
#[derive(Debug, Error)]
pub enum NumberError {
    #[error("second decimal point")]
    ExtraDecimalPoint,

    #[error("invalid character '{0}' immediately after number")]
    TrailingAlphabetic(char),
}

impl LexError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            LexError::Io(_) => codes::IO_ERROR,
            LexError::MalformedNumber { .. } => codes::INVALID_NUMBER,
            LexError::UnterminatedString { .. } => codes::UNTERMINATED_STRING,
            LexError::UnrecognizedCharacter { .. } => codes::UNEXPECTED_CHARACTER,
        }
    }

    /// 1-indexed (line, column) of the offending position, if positional.
    pub fn location(&self) -> Option<(usize, usize)> {
        match *self {
            LexError::Io(_) => None,
            LexError::MalformedNumber { line, column, .. }
            | LexError::UnterminatedString { line, column }
            | LexError::UnrecognizedCharacter { line, column, .. } => Some((line, column)),
        }
    }
}
