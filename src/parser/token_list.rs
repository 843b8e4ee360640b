//! Token-list reader
//!
//! The parser consumes tokens, not source text. This module reads a token
//! *listing*: already separated tokens written one word each, as in
//!
//! ```text
//! num f ( void ) ->
//!     return 0 ;
//! :)
//! ```
//!
//! Every line break after a non-empty line becomes a soft-newline token, and
//! each word is classified against a fixed symbol table. Words that are
//! neither symbols, numbers, string literals nor identifiers become
//! [`TokenKind::Error`] tokens; a `//` word turns the rest of its line into a
//! single comment token.

use super::ast::SourceLocation;
use super::token::{Token, TokenKind};
use rustc_hash::FxHashMap;

const SYMBOLS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("return", TokenKind::Return),
    ("num", TokenKind::Num),
    ("void", TokenKind::Void),
    ("=", TokenKind::Assign),
    ("<", TokenKind::Lt),
    ("<=", TokenKind::Lte),
    (">", TokenKind::Gt),
    (">=", TokenKind::Gte),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Neq),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Over),
    ("%", TokenKind::Mod),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
    ("->", TokenKind::BodyBegin),
    ("-->", TokenKind::BodyBegin),
    (":)", TokenKind::BodyEnd),
];

/// Reads token listings into token vectors.
pub struct TokenListReader {
    symbols: FxHashMap<&'static str, TokenKind>,
}

impl Default for TokenListReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenListReader {
    pub fn new() -> Self {
        Self {
            symbols: SYMBOLS.iter().copied().collect(),
        }
    }

    /// Classify a single word.
    pub fn classify(&self, word: &str) -> TokenKind {
        if let Some(kind) = self.symbols.get(word) {
            return *kind;
        }

        let mut chars = word.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => {
                if chars.all(|c| c.is_ascii_digit()) {
                    TokenKind::Number
                } else {
                    TokenKind::Error
                }
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    TokenKind::Ident
                } else {
                    TokenKind::Error
                }
            }
            Some('"') if word.len() >= 2 && word.ends_with('"') => TokenKind::String,
            _ => TokenKind::Error,
        }
    }

    /// Read a whole listing. The result always ends with an end-of-stream
    /// token placed just past the last non-empty line.
    pub fn read(&self, listing: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut end_of_input = SourceLocation::new(1, 1);

        for (index, line) in listing.lines().enumerate() {
            let line_number = index + 1;
            let mut words = words_with_columns(line).peekable();
            if words.peek().is_none() {
                continue;
            }

            for (column, word) in words {
                let location = SourceLocation::new(line_number, column);
                if word.starts_with("//") {
                    let text = line[column - 1..].trim_end();
                    tokens.push(Token::new(TokenKind::Comment, text, location));
                    break;
                }
                tokens.push(Token::new(self.classify(word), word, location));
            }

            let end = SourceLocation::new(line_number, line.len() + 1);
            tokens.push(Token::newline(end));
            end_of_input = end;
        }

        tokens.push(Token::eof(end_of_input));
        tokens
    }
}

/// Read a listing with the default symbol table.
pub fn read(listing: &str) -> Vec<Token> {
    TokenListReader::new().read(listing)
}

/// Whitespace-separated words of a line with their 1-based byte columns.
fn words_with_columns(line: &str) -> impl Iterator<Item = (usize, &str)> {
    line.split(|c: char| c.is_ascii_whitespace())
        .scan(0usize, |offset, word| {
            let start = *offset;
            *offset += word.len() + 1;
            Some((start + 1, word))
        })
        .filter(|(_, word)| !word.is_empty())
}
