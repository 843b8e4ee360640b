//! C-Minus syntax analyzer
//!
//! This module turns a token sequence into a syntax tree:
//! - [`token`]: token kinds and tokens as handed over by a scanner
//! - [`token_list`]: reads whitespace-separated token listings
//! - [`cursor`]: bounded, comment-free cursor over the tokens
//! - [`parse`]: the [`Parser`](parse::Parser) and its matching primitives
//! - [`ast`]: syntax tree node definitions
//! - [`diagnostics`]: syntax errors and the error limit
//!
//! # Supported Language
//!
//! - Types: `num`, `void`, pointers (`num * p`), fixed-size arrays
//! - Functions: `type name ( params ) -> ... :)`
//! - Statements: assignments, `if`/`else`, `while`, `return`, `{ }` blocks
//! - Expressions: `+ - * /`, one relational operator, calls, subscripts
//! - Statements end with `;` or a line break
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one routine per grammar rule, with
//! precedence encoded by the rule hierarchy. Errors are collected, never
//! thrown.

pub mod ast;
pub mod cursor;
mod declarations;
pub mod diagnostics;
mod expressions;
pub mod parse;
mod statements;
pub mod token;
pub mod token_list;

pub use parse::{parse, Parser, ParserConfig};
