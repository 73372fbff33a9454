//! Token definitions for the lexer.

use std::fmt;

/// A classified lexeme produced by the lexer.
///
/// `text` holds the exact source spelling, except for string tokens where
/// the delimiting quotes are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, "")
    }

    /// Whether this token is an identifier that spells a reserved word.
    ///
    /// Reserved words are not a separate token kind; they come back as
    /// `Identifier` tokens and callers that care use this query.
    pub fn is_reserved(&self) -> bool {
        self.kind == TokenKind::Identifier && is_reserved_word(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind.ordinal(), self.text)
    }
}

/// All token kinds, in their fixed dump ordering.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier = 0,
    Number = 1,
    String = 2,
    Symbol = 3,
    EndOfFile = 4,
}

impl TokenKind {
    /// Stable integer encoding used by the textual token dump.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Check whether an identifier spells a reserved word.
pub fn is_reserved_word(ident: &str) -> bool {
    matches!(
        ident,
        "if" | "else"
            | "while"
            | "for"
            | "return"
            | "break"
            | "main"
            | "void"
            | "int"
            | "char"
            | "double"
            | "float"
    )
}

/// Check whether a character is a registered single-character symbol.
///
/// This is the dispatch gate for symbol scanning: every 2-character symbol
/// starts with a character in this set.
pub fn is_symbol_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>'
            | '!'
            | '='
            | '+'
            | '-'
            | '%'
            | '*'
            | '/'
            | '&'
            | '|'
            | '^'
            | '~'
            | ','
            | ';'
            | '\''
            | '"'
            | '['
            | ']'
            | '{'
            | '}'
            | '('
            | ')'
    )
}

/// Check whether two adjacent characters form a registered 2-character symbol.
///
/// The `//` pair is registered even though comment stripping consumes it
/// before symbol scanning can ever see it.
pub fn is_symbol_pair(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('<', '=')
            | ('>', '=')
            | ('!', '=')
            | ('=', '=')
            | ('+', '+')
            | ('+', '=')
            | ('-', '-')
            | ('-', '=')
            | ('*', '=')
            | ('/', '/')
            | ('/', '=')
            | ('&', '&')
            | ('|', '|')
            | ('<', '<')
            | ('>', '>')
    )
}
