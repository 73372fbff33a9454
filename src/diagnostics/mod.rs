//! Diagnostic rendering for fatal lexer errors.

use colored::Colorize;
use std::fmt;

/// Location in source code, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(file: &str, line: usize, column: usize) -> Self {
        Self {
            file: file.to_string(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A fatal diagnostic with code, message, and optional position and help.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub location: Option<SourceLocation>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header: error[E001]: message
        writeln!(
            f,
            "{}[{}]: {}",
            "error".red().bold(),
            self.code.cyan(),
            self.message
        )?;

        if let Some(ref loc) = self.location {
            writeln!(f, " --> {}", loc.to_string().blue())?;
        }

        if let Some(ref help) = self.help {
            writeln!(f, "   {} {}: {}", "=".blue(), "help".green().bold(), help)?;
        }

        Ok(())
    }
}

/// Error codes for lexer diagnostics
pub mod codes {
    pub const IO_ERROR: &str = "E000";
    pub const UNEXPECTED_CHARACTER: &str = "E001";
    pub const UNTERMINATED_STRING: &str = "E002";
    pub const INVALID_NUMBER: &str = "E003";
}
