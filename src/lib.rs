//! # Introduction
//!
//! `cminus` is the syntax analysis stage of a compiler for C-Minus, a small
//! teaching language with a single numeric type, pointers, arrays and
//! newline-terminated statements. It consumes the scanner's token sequence
//! and produces a syntax tree plus a list of syntax diagnostics.
//!
//! ## Pipeline
//!
//! ```text
//! Tokens → TokenCursor → Parser → Program + Diagnostics
//! ```
//!
//! 1. [`parser::token`] and [`parser::token_list`] describe the scanner's
//!    output; the listing reader accepts tokens as whitespace-separated text.
//! 2. [`parser::cursor`] hides comments and pins the stream to its end marker.
//! 3. [`parser::Parser`] runs the recursive descent grammar.
//! 4. [`parser::ast`] holds the resulting tree; expression type slots are
//!    left empty for the type checker.
//! 5. [`parser::diagnostics`] records syntax errors without stopping the
//!    parse.
//!
//! ## Example
//!
//! ```
//! use cminus::parser::{Parser, ast::Node};
//!
//! let mut parser = Parser::from_listing("num x ;\nx = 2 + 3 * 4");
//! let program = parser.parse_program();
//!
//! assert!(!parser.had_error());
//! assert_eq!(program.nodes.len(), 2);
//! assert!(matches!(program.nodes[0], Node::Declaration(_)));
//! ```

pub mod parser;
