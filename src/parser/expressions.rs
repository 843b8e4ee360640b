//! Expression parsing implementation
//!
//! Precedence is encoded by stratifying the grammar, one routine per level:
//!
//! ```text
//! expression  ::= simple_exp [ relop simple_exp ] [ call ]
//! simple_exp  ::= term { ("+" | "-") term }
//! term        ::= factor { ("*" | "/") factor }
//! factor      ::= "(" expression ")" | NUMBER | ID [ "[" expression "]" ]
//! call        ::= "(" [ factor { "," factor } ] ")"
//! ```
//!
//! Only one relational operator is allowed per expression; `+ - * /` are
//! left-associative.
//!
//! # Calls
//!
//! A call is recognised at the *expression* level: once the operand chain is
//! parsed, a following `(` turns the whole expression into a call of the
//! last identifier read, so `a < f ( x )` parses as `f ( x )`. The callee is
//! handed to [`Parser::parse_call`] explicitly rather than recovered from
//! the token stream. Call arguments are factors, not full expressions.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::diagnostics::DiagnosticKind;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use tracing::warn;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Option<Expr> {
        let mut expr = self.parse_simple_expression();

        if let Some(op) = relational_operator(self.current_kind()) {
            let location = self.current_location();
            self.advance();
            let right = self.parse_simple_expression();
            expr = Some(Expr::binary(op, expr, right, location));
        }

        if self.check(TokenKind::LParen) {
            expr = self.parse_call_suffix(expr);
        }

        expr
    }

    /// Parse the argument list following an expression and build the call
    fn parse_call_suffix(&mut self, expr: Option<Expr>) -> Option<Expr> {
        let callee = expr
            .as_ref()
            .and_then(Expr::trailing_identifier)
            .map(|(name, location)| (name.to_string(), location));

        let Some((callee, location)) = callee else {
            self.report(DiagnosticKind::InvalidCallee);
            self.parse_argument_list();
            return expr;
        };

        if let Some(ExprKind::BinaryOp { op, .. }) = expr.as_ref().map(|e| &e.kind) {
            warn!(
                line = location.line,
                callee = %callee,
                relational = op.is_relational(),
                "call replaces the operator expression before it"
            );
        }

        Some(self.parse_call(callee, location))
    }

    /// Parse call arguments for an already-read callee: ( arg, arg, ... )
    pub(crate) fn parse_call(&mut self, callee: String, location: SourceLocation) -> Expr {
        let args = self.parse_argument_list();
        Expr::new(ExprKind::Call { callee, args }, location)
    }

    fn parse_argument_list(&mut self) -> Vec<Expr> {
        let mut args = Vec::new();

        self.expect(TokenKind::LParen);

        if !self.at_list_end() {
            args.extend(self.parse_factor());

            while !self.at_list_end() {
                let start = self.cursor.position();
                self.expect(TokenKind::Comma);
                args.extend(self.parse_factor());
                if self.cursor.position() == start {
                    self.unrecognized_start();
                }
            }
        }

        self.expect(TokenKind::RParen);
        args
    }

    /// Parse additive chain (+ -)
    fn parse_simple_expression(&mut self) -> Option<Expr> {
        let mut left = self.parse_term();

        while let Some(op) = additive_operator(self.current_kind()) {
            let location = self.current_location();
            self.advance();
            let right = self.parse_term();
            left = Some(Expr::binary(op, left, right, location));
        }

        left
    }

    /// Parse multiplicative chain (* /)
    fn parse_term(&mut self) -> Option<Expr> {
        let mut left = self.parse_factor();

        while let Some(op) = multiplicative_operator(self.current_kind()) {
            let location = self.current_location();
            self.advance();
            let right = self.parse_factor();
            left = Some(Expr::binary(op, left, right, location));
        }

        left
    }

    /// Parse factor: parenthesized expression, number, identifier or subscript
    fn parse_factor(&mut self) -> Option<Expr> {
        let location = self.current_location();

        match self.current_kind() {
            TokenKind::Number => {
                let value = self.parse_integer_literal();
                Some(Expr::new(ExprKind::Constant(value), location))
            }
            TokenKind::Ident => {
                let name = self.expect_identifier();
                if self.match_token(TokenKind::LBracket) {
                    let index = self.parse_nested_expression();
                    self.expect(TokenKind::RBracket);
                    Some(Expr::new(
                        ExprKind::Index {
                            array: name,
                            index: index.map(Box::new),
                        },
                        location,
                    ))
                } else {
                    Some(Expr::new(ExprKind::Identifier(name), location))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_nested_expression();
                self.expect(TokenKind::RParen);
                expr
            }
            _ => {
                self.unrecognized_start();
                None
            }
        }
    }

    /// Parse a parenthesized or subscript expression one nesting level down
    fn parse_nested_expression(&mut self) -> Option<Expr> {
        if !self.enter_nesting() {
            return None;
        }
        let expr = self.parse_expression();
        self.exit_nesting();
        expr
    }

    /// Consume a NUMBER token; values outside `i32` are reported and read as 0
    pub(crate) fn parse_integer_literal(&mut self) -> i32 {
        let value = match self.cursor.current().text.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                let text = self.cursor.current().text.clone();
                self.report(DiagnosticKind::InvalidLiteral { text });
                0
            }
        };
        self.advance();
        value
    }
}

fn relational_operator(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Lt => Some(BinOp::Lt),
        TokenKind::Lte => Some(BinOp::Le),
        TokenKind::Gt => Some(BinOp::Gt),
        TokenKind::Gte => Some(BinOp::Ge),
        TokenKind::Eq => Some(BinOp::Eq),
        TokenKind::Neq => Some(BinOp::Ne),
        _ => None,
    }
}

fn additive_operator(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        _ => None,
    }
}

fn multiplicative_operator(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Star => Some(BinOp::Mul),
        TokenKind::Over => Some(BinOp::Div),
        _ => None,
    }
}
