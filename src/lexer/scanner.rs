//! Line-buffered scanner that produces tokens from source text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{LexError, NumberError};
use super::token::{self, Token, TokenKind};

/// Lexer over a line-oriented source of text.
///
/// The cursor is a buffered line plus a column offset into it; a 0-based
/// line counter ticks every time a new physical line is buffered during
/// scanning. Lines are read strictly forward and discarded once consumed.
pub struct Lexer<R: BufRead> {
    reader: R,
    line: Vec<char>,
    col: usize,
    line_no: usize,
    exhausted: bool,
}

impl Lexer<BufReader<File>> {
    /// Open a source file and buffer its first line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexError> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> Lexer<R> {
    /// Build a lexer over any buffered reader and buffer its first line.
    pub fn new(reader: R) -> Result<Self, LexError> {
        let mut lexer = Self {
            reader,
            line: Vec::new(),
            col: 0,
            line_no: 0,
            exhausted: false,
        };
        lexer.fill_line()?;
        Ok(lexer)
    }

    /// Read the next token.
    ///
    /// Returns an `EndOfFile` token once the source is exhausted, and keeps
    /// returning it on every further call. Dispatch is a pure function of
    /// the single character found by token-start scanning.
    pub fn read_token(&mut self) -> Result<Token, LexError> {
        let ch = match self.skip_to_token()? {
            None => return Ok(Token::eof()),
            Some(ch) => ch,
        };

        match ch {
            '0'..='9' => {
                let text = self.scan_number()?;
                Ok(Token::new(TokenKind::Number, text))
            }
            '"' => {
                let text = self.scan_string()?;
                Ok(Token::new(TokenKind::String, text))
            }
            c if is_ident_start(c) => Ok(Token::new(TokenKind::Identifier, self.scan_identifier())),
            c if token::is_symbol_char(c) => Ok(Token::new(TokenKind::Symbol, self.scan_symbol())),
            c => Err(LexError::UnrecognizedCharacter {
                ch: c,
                line: self.line_no + 1,
                column: self.col + 1,
            }),
        }
    }

    /// Iterate over the remaining tokens.
    ///
    /// Yields the `EndOfFile` token once and then fuses; also fuses after
    /// yielding an error.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    /// Skip padding and comment lines up to the start of the next token.
    ///
    /// Padding (space, tab, NUL, newline) is skipped within the buffered
    /// line. Running off the end of the line, or hitting a `//` marker at
    /// the scan position, discards the rest of the line and buffers the
    /// next one. `None` means the source is exhausted.
    fn skip_to_token(&mut self) -> Result<Option<char>, LexError> {
        loop {
            while self.col < self.line.len() && is_padding(self.line[self.col]) {
                self.col += 1;
            }

            let at_comment = self.col + 1 < self.line.len()
                && self.line[self.col] == '/'
                && self.line[self.col + 1] == '/';

            if self.col < self.line.len() && !at_comment {
                return Ok(Some(self.line[self.col]));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.next_line()?;
        }
    }

    fn next_line(&mut self) -> Result<(), LexError> {
        self.fill_line()?;
        self.line_no += 1;
        self.col = 0;
        Ok(())
    }

    /// Replace the line buffer with the next physical line, stripping the
    /// line terminator. Sets the exhausted flag on end of input.
    fn fill_line(&mut self) -> Result<(), LexError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            self.exhausted = true;
            self.line.clear();
            return Ok(());
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        self.line = buf.chars().collect();
        Ok(())
    }

    /// Scan a numeric literal: decimal digits with at most one decimal point.
    ///
    /// Error positions are taken at the moment of detection, not at the
    /// digit that started the number.
    fn scan_number(&mut self) -> Result<String, LexError> {
        let mut text = String::new();
        let mut seen_decimal = false;

        while self.col < self.line.len() {
            let c = self.line[self.col];
            if c == '.' {
                if seen_decimal {
                    return Err(LexError::MalformedNumber {
                        reason: NumberError::ExtraDecimalPoint,
                        line: self.line_no + 1,
                        column: self.col + 1,
                    });
                }
                seen_decimal = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.col += 1;
        }

        // Reject forms like `123abc` outright.
        if self.col < self.line.len() && self.line[self.col].is_alphabetic() {
            return Err(LexError::MalformedNumber {
                reason: NumberError::TrailingAlphabetic(self.line[self.col]),
                line: self.line_no + 1,
                column: self.col + 1,
            });
        }

        Ok(text)
    }

    /// Scan a string literal. The delimiting quotes are consumed but not
    /// part of the returned text. No escape processing: a backslash is an
    /// ordinary character, and strings cannot span physical lines.
    fn scan_string(&mut self) -> Result<String, LexError> {
        let mut text = String::new();

        self.col += 1; // opening quote
        while self.col < self.line.len() {
            let c = self.line[self.col];
            self.col += 1;
            if c == '"' {
                return Ok(text);
            }
            text.push(c);
        }

        Err(LexError::UnterminatedString {
            line: self.line_no + 1,
            column: self.col + 1,
        })
    }

    /// Scan a maximal run of identifier characters.
    fn scan_identifier(&mut self) -> String {
        let mut text = String::new();
        while self.col < self.line.len() && is_ident_continue(self.line[self.col]) {
            text.push(self.line[self.col]);
            self.col += 1;
        }
        text
    }

    /// Scan a symbol with maximal munch: a registered 2-character symbol
    /// wins over its 1-character prefix. Dispatch has already confirmed the
    /// first character is a registered symbol character, so the 1-character
    /// fallback consumes it unchecked.
    fn scan_symbol(&mut self) -> String {
        if self.col + 1 < self.line.len()
            && token::is_symbol_pair(self.line[self.col], self.line[self.col + 1])
        {
            let pair: String = self.line[self.col..self.col + 2].iter().collect();
            self.col += 2;
            return pair;
        }

        let text = self.line[self.col].to_string();
        self.col += 1;
        text
    }
}

/// Iterator adapter over a lexer's remaining tokens.
pub struct Tokens<'a, R: BufRead> {
    lexer: &'a mut Lexer<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.read_token() {
            Ok(tok) => {
                if tok.kind == TokenKind::EndOfFile {
                    self.done = true;
                }
                Some(Ok(tok))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Characters skipped as padding between tokens.
fn is_padding(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\0' || c == '\n'
}

fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_xid::UnicodeXID::is_xid_start(c)
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || unicode_xid::UnicodeXID::is_xid_continue(c)
}
