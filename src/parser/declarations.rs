//! Declaration parsing implementation
//!
//! This module handles parsing of declarations in C-Minus programs:
//!
//! - Variables: `num x ;`, `num * p ;`
//! - Arrays: `num a [ 10 ] ;`
//! - Functions: `num f ( num a , num b [ ] ) -> ... :)`
//! - Function parameters
//!
//! # Grammar
//!
//! ```text
//! declaration   ::= function_decl | var_decl
//! var_decl      ::= type ["*"] ID [ "[" NUMBER "]" ] terminator
//! function_decl ::= type ["*"] ID "(" params ")" "->" stmt_sequence ":)"
//! params        ::= "void" | [ param { "," param } ]
//! param         ::= type ["*"] ID [ "[" "]" ]
//! type          ::= "num" | "void"
//! ```
//!
//! A declaration does not reveal whether it declares a function until its
//! third token (fourth with a pointer marker), so the dispatch peeks ahead
//! for the opening parenthesis of a parameter list.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a declaration starting at a type specifier
    pub(crate) fn parse_declaration(&mut self) -> Decl {
        if self.is_function_declaration() {
            self.parse_function_declaration()
        } else {
            self.parse_variable_declaration()
        }
    }

    fn is_function_declaration(&self) -> bool {
        // type ID '('  or  type '*' ID '('
        self.cursor.peek(2).is(TokenKind::LParen)
            || (self.cursor.peek(1).is(TokenKind::Star) && self.cursor.peek(3).is(TokenKind::LParen))
    }

    /// Parse variable or array declaration: type [*] name [ '[' size ']' ] ;
    fn parse_variable_declaration(&mut self) -> Decl {
        let location = self.current_location();

        let specified = self.parse_type_specifier();
        let is_pointer = self.match_token(TokenKind::Star);
        let name = self.expect_identifier();

        let decl = if self.match_token(TokenKind::LBracket) {
            let size = self.parse_array_size();
            self.expect(TokenKind::RBracket);
            Decl::Array {
                name,
                value_type: ValueType::Address,
                size,
                location,
            }
        } else {
            Decl::Variable {
                name,
                value_type: if is_pointer {
                    ValueType::Address
                } else {
                    specified
                },
                location,
            }
        };

        self.expect_terminator();
        decl
    }

    fn parse_array_size(&mut self) -> i32 {
        if self.check(TokenKind::Number) {
            self.parse_integer_literal()
        } else {
            self.mismatch(TokenKind::Number);
            0
        }
    }

    /// Parse function declaration: type [*] name ( params ) -> body :)
    #[tracing::instrument(level = "trace", skip_all)]
    fn parse_function_declaration(&mut self) -> Decl {
        let location = self.current_location();

        let specified = self.parse_type_specifier();
        let return_type = if self.match_token(TokenKind::Star) {
            ValueType::Address
        } else {
            specified
        };
        let name = self.expect_identifier();
        tracing::trace!(%name, "function declaration");

        let params = self.parse_parameter_list();
        let body = self.parse_function_body();

        Decl::Function {
            name,
            return_type,
            params,
            body,
            location,
        }
    }

    fn parse_function_body(&mut self) -> FunctionBody {
        self.skip_newlines();
        let location = self.current_location();

        if !self.enter_nesting() {
            return FunctionBody {
                statements: Vec::new(),
                location,
            };
        }
        self.expect(TokenKind::BodyBegin);
        let statements = self.parse_statement_sequence();
        self.expect(TokenKind::BodyEnd);
        self.exit_nesting();

        FunctionBody {
            statements,
            location,
        }
    }

    /// Parse parameter list: ( void ) | ( ) | ( param, param, ... )
    pub(crate) fn parse_parameter_list(&mut self) -> Vec<Param> {
        let mut params = Vec::new();

        self.expect(TokenKind::LParen);

        // (void) is an explicitly empty list and keeps its marker
        if self.check(TokenKind::Void) && self.cursor.peek(1).is(TokenKind::RParen) {
            params.push(Param::Void {
                location: self.current_location(),
            });
            self.advance();
        } else if !self.at_list_end() {
            params.push(self.parse_parameter());

            while !self.at_list_end() {
                let start = self.cursor.position();
                self.expect(TokenKind::Comma);
                params.push(self.parse_parameter());
                if self.cursor.position() == start {
                    self.unrecognized_start();
                }
            }
        }

        self.expect(TokenKind::RParen);
        params
    }

    /// Parse a single parameter: type [*] name [ '[' ']' ]
    fn parse_parameter(&mut self) -> Param {
        let location = self.current_location();

        let value_type = self.parse_type_specifier();
        let is_pointer = self.match_token(TokenKind::Star);
        let name = self.expect_identifier();

        let is_array = self.match_token(TokenKind::LBracket);
        if is_array {
            self.expect(TokenKind::RBracket);
        }

        if is_pointer || is_array {
            Param::ArrayRef { name, location }
        } else {
            Param::Scalar {
                name,
                value_type,
                location,
            }
        }
    }

    /// Parse `num` or `void`; anything else is reported and read as `void`
    fn parse_type_specifier(&mut self) -> ValueType {
        let value_type = match self.current_kind() {
            TokenKind::Num => ValueType::Num,
            TokenKind::Void => ValueType::Void,
            _ => {
                self.mismatch(TokenKind::Num);
                return ValueType::Void;
            }
        };
        self.advance();
        value_type
    }

    /// Tokens that end a parameter or argument list, well-formed or not
    pub(crate) fn at_list_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::RParen
                | TokenKind::Eof
                | TokenKind::Newline
                | TokenKind::Semicolon
                | TokenKind::BodyBegin
                | TokenKind::BodyEnd
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}
