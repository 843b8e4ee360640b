//! Token model shared by the token-list reader, the cursor and the parser
//!
//! A [`Token`] is a classification ([`TokenKind`]) plus the literal text the
//! scanner saw and the place it saw it. Tokens are never modified after they
//! are produced.

use super::ast::SourceLocation;
use std::fmt;

/// Lexical categories of the C-Minus language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words
    If,
    Else,
    While,
    Return,
    Num,
    Void,

    // Operators
    Assign, // =
    Lt,     // <
    Lte,    // <=
    Gt,     // >
    Gte,    // >=
    Eq,     // ==
    Neq,    // !=
    Plus,   // +
    Minus,  // -
    Star,   // *
    Over,   // /
    Mod,    // %

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,

    // Function body markers and the soft newline
    BodyBegin, // ->
    BodyEnd,   // :)
    Newline,

    // Literals and names
    Ident,
    Number,
    String,
    Comment,

    Eof,
    Error,
}

impl TokenKind {
    pub fn is_reserved_word(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Num
                | TokenKind::Void
        )
    }

    pub fn is_type_specifier(self) -> bool {
        matches!(self, TokenKind::Num | TokenKind::Void)
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::Lte
                | TokenKind::Gt
                | TokenKind::Gte
                | TokenKind::Eq
                | TokenKind::Neq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Num => write!(f, "'num'"),
            TokenKind::Void => write!(f, "'void'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Lte => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Gte => write!(f, "'>='"),
            TokenKind::Eq => write!(f, "'=='"),
            TokenKind::Neq => write!(f, "'!='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Over => write!(f, "'/'"),
            TokenKind::Mod => write!(f, "'%'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::BodyBegin => write!(f, "'->'"),
            TokenKind::BodyEnd => write!(f, "':)'"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Error => write!(f, "error token"),
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenKind::Eof, "", location)
    }

    pub fn newline(location: SourceLocation) -> Self {
        Self::new(TokenKind::Newline, "\n", location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Describes the token the way the compiler's listing file does, e.g.
/// `ID, name= x` or `reserved word: while`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            kind if kind.is_reserved_word() => write!(f, "reserved word: {}", self.text),
            TokenKind::Number => write!(f, "NUMBER, val= {}", self.text),
            TokenKind::Ident => write!(f, "ID, name= {}", self.text),
            TokenKind::String => write!(f, "STRING, val= {}", self.text),
            TokenKind::Comment => write!(f, "COMMENT, val= {}", self.text),
            TokenKind::Error => write!(f, "ERROR: {}", self.text),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Newline => write!(f, "ENTER"),
            TokenKind::BodyBegin => write!(f, "-->"),
            TokenKind::BodyEnd => write!(f, ":)"),
            _ => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize) -> SourceLocation {
        SourceLocation::new(line, 1)
    }

    #[test]
    fn test_listing_descriptions() {
        assert_eq!(Token::new(TokenKind::Ident, "x", at(1)).to_string(), "ID, name= x");
        assert_eq!(
            Token::new(TokenKind::While, "while", at(1)).to_string(),
            "reserved word: while"
        );
        assert_eq!(Token::new(TokenKind::Number, "42", at(1)).to_string(), "NUMBER, val= 42");
        assert_eq!(Token::new(TokenKind::Lte, "<=", at(1)).to_string(), "<=");
        assert_eq!(Token::newline(at(3)).to_string(), "ENTER");
        assert_eq!(Token::eof(at(3)).to_string(), "EOF");
    }

    #[test]
    fn test_kind_classes() {
        assert!(TokenKind::Num.is_type_specifier());
        assert!(TokenKind::Void.is_type_specifier());
        assert!(!TokenKind::Ident.is_type_specifier());
        assert!(TokenKind::Neq.is_relational());
        assert!(!TokenKind::Assign.is_relational());
        assert_eq!(TokenKind::LBrace.to_string(), "'{'");
    }
}
