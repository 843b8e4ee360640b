//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! configuration, the token-matching primitives the grammar is built from,
//! diagnostic reporting, and the program entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser over a [`TokenCursor`]:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: variable, array and function declarations
//! - `statements`: statement sequences and statements
//! - `expressions`: the expression hierarchy, calls and subscripts
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state. Grammar routines never
//! fail: malformed input is recorded in [`Diagnostics`] and the routine
//! returns whatever part of the tree it could build.

use crate::parser::ast::*;
use crate::parser::cursor::TokenCursor;
use crate::parser::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::token::{Token, TokenKind};
use crate::parser::token_list;
use tracing::trace;

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Number of diagnostics after which the parser gives up
    pub max_diagnostics: usize,
    /// Deepest allowed nesting of blocks, function bodies, parentheses and
    /// subscripts; bounds the recursion of the grammar routines
    pub max_nesting: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_diagnostics: 100,
            max_nesting: 256,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig::default()
    }

    pub fn with_max_diagnostics(mut self, limit: usize) -> Self {
        self.max_diagnostics = limit;
        self
    }

    pub fn with_max_nesting(mut self, limit: usize) -> Self {
        self.max_nesting = limit;
        self
    }
}

/// Recursive descent parser for C-Minus
pub struct Parser {
    pub(crate) cursor: TokenCursor,
    pub(crate) diagnostics: Diagnostics,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            diagnostics: Diagnostics::new(config.max_diagnostics),
            config,
            depth: 0,
        }
    }

    /// Parser over a whitespace-separated token listing.
    pub fn from_listing(listing: &str) -> Self {
        Self::new(token_list::read(listing))
    }

    /// Replace the token sequence, discarding the previous diagnostics.
    pub fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.cursor = TokenCursor::new(tokens);
        self.diagnostics = Diagnostics::new(self.config.max_diagnostics);
        self.depth = 0;
    }

    /// Parse the entire program (top-level statement sequence)
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        loop {
            program.nodes.extend(self.parse_statement_sequence());
            if self.is_at_end() {
                break;
            }
            // A stray 'else', '}' or ':)' ended the sequence early
            self.unrecognized_start();
        }

        trace!(
            nodes = program.nodes.len(),
            diagnostics = self.diagnostics.len(),
            "parsed program"
        );
        program
    }

    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    // ===== Helper methods =====

    pub(crate) fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.cursor.current().location
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.cursor.current().is(kind)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    pub(crate) fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Consume the current token if it is `kind`; never reports.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is `kind`, otherwise report a
    /// mismatch and leave the cursor where it is.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.match_token(kind) {
            true
        } else {
            self.mismatch(kind);
            false
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> String {
        if self.check(TokenKind::Ident) {
            let name = self.cursor.current().text.clone();
            self.advance();
            name
        } else {
            self.mismatch(TokenKind::Ident);
            String::new()
        }
    }

    /// Statements end with ';' or a soft newline.
    pub(crate) fn expect_terminator(&mut self) -> bool {
        if self.match_token(TokenKind::Semicolon) || self.match_token(TokenKind::Newline) {
            true
        } else {
            self.mismatch(TokenKind::Semicolon);
            false
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.match_token(TokenKind::Newline) {}
    }

    /// True if `kind` follows the cursor, possibly after soft newlines.
    pub(crate) fn check_past_newlines(&self, kind: TokenKind) -> bool {
        let mut n = 0;
        while self.cursor.peek(n).is(TokenKind::Newline) {
            n += 1;
        }
        self.cursor.peek(n).is(kind)
    }

    // ===== Nesting =====

    /// Enter a nested construct. Past `max_nesting` the parse is abandoned:
    /// the error is recorded, later reports are dropped and the cursor jumps
    /// to the end, so callers unwind without recursing further.
    pub(crate) fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.config.max_nesting {
            let kind = DiagnosticKind::NestingTooDeep {
                limit: self.config.max_nesting,
            };
            let location = self.current_location();
            self.diagnostics.give_up(kind, location);
            self.cursor.skip_to_end();
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ===== Diagnostics =====

    pub(crate) fn report(&mut self, kind: DiagnosticKind) {
        let location = self.current_location();
        if !self.diagnostics.report(kind, location) {
            self.cursor.skip_to_end();
        }
    }

    pub(crate) fn mismatch(&mut self, expected: TokenKind) {
        let found = self.cursor.current().to_string();
        self.report(DiagnosticKind::Mismatch { expected, found });
    }

    /// Report the current token as unusable here and skip it.
    pub(crate) fn unrecognized_start(&mut self) {
        let found = self.cursor.current().to_string();
        self.report(DiagnosticKind::UnrecognizedStart { found });
        self.advance();
    }
}

/// Parse a token sequence with the default configuration.
pub fn parse(tokens: Vec<Token>) -> (Program, Diagnostics) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}
