//! Syntax diagnostics
//!
//! Syntax errors never abort the parse. Each one is recorded as a
//! [`Diagnostic`] tagged with the line it occurred on, the shared "had error"
//! flag is raised, and the grammar carries on with its recovery policy:
//!
//! - a *mismatch* (expected token not found) consumes nothing;
//! - an *unrecognized start* (no rule for the lookahead) consumes one token;
//! - list loops that make no progress skip one token;
//! - once [`Diagnostics::limit`] errors are recorded, or blocks and
//!   parentheses nest too deeply, the parser gives up and skips to the end
//!   of the stream.

use super::ast::SourceLocation;
use super::token::TokenKind;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("unexpected token -> {found} (expected {expected})")]
    Mismatch { expected: TokenKind, found: String },

    #[error("unexpected token -> {found}")]
    UnrecognizedStart { found: String },

    #[error("integer literal out of range: {text}")]
    InvalidLiteral { text: String },

    #[error("call target is not a name")]
    InvalidCallee,

    #[error("too many syntax errors ({limit}), giving up")]
    TooManyErrors { limit: usize },

    #[error("nesting deeper than {limit} levels, giving up")]
    NestingTooDeep { limit: usize },
}

/// A syntax error with the location of the token it was found at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error at line {}: {kind}", .location.line)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// Collected diagnostics of one parse plus the aggregate error flag
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    had_error: bool,
    limit: usize,
    closed: bool,
}

impl Diagnostics {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            had_error: false,
            limit,
            closed: false,
        }
    }

    /// Record a diagnostic. Returns `false` once the limit has been reached;
    /// the limit notice itself is the last entry recorded.
    pub fn report(&mut self, kind: DiagnosticKind, location: SourceLocation) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.had_error = true;

        let diagnostic = Diagnostic { kind, location };
        debug!(line = location.line, column = location.column, "{}", diagnostic);
        self.entries.push(diagnostic);

        if self.entries.len() >= self.limit {
            let notice = Diagnostic {
                kind: DiagnosticKind::TooManyErrors { limit: self.limit },
                location,
            };
            debug!("{}", notice);
            self.entries.push(notice);
            self.closed = true;
            return false;
        }
        true
    }

    /// Record a diagnostic that ends the parse; nothing is recorded after it.
    pub fn give_up(&mut self, kind: DiagnosticKind, location: SourceLocation) {
        if self.closed {
            return;
        }
        self.had_error = true;

        let diagnostic = Diagnostic { kind, location };
        debug!(line = location.line, column = location.column, "{}", diagnostic);
        self.entries.push(diagnostic);
        self.closed = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// True once the parse has been given up on.
    pub fn is_exhausted(&self) -> bool {
        self.closed
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
