//! Read-only cursor over a token sequence
//!
//! The cursor owns the token vector and guarantees it ends with exactly one
//! reachable [`TokenKind::Eof`], so `current`, `peek` and `advance` never
//! run off the end: looking past the last token yields the end-of-stream
//! token again. Comment tokens are trivia to the grammar and are dropped on
//! construction.

use super::ast::SourceLocation;
use super::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| !token.is(TokenKind::Comment))
            .collect();

        if let Some(end) = tokens.iter().position(|token| token.is(TokenKind::Eof)) {
            tokens.truncate(end + 1);
        } else {
            let location = tokens
                .last()
                .map(|token| token.location)
                .unwrap_or_else(|| SourceLocation::new(1, 1));
            tokens.push(Token::eof(location));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Token `n` positions ahead of the cursor; `peek(0)` is `current()`.
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + n).min(last)]
    }

    /// The most recently consumed token, if any.
    pub fn previous(&self) -> Option<&Token> {
        self.position.checked_sub(1).map(|i| &self.tokens[i])
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current().is(TokenKind::Eof)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn skip_to_end(&mut self) {
        self.position = self.tokens.len() - 1;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        // the end-of-stream token is always present
        self.tokens.len() == 1
    }
}
