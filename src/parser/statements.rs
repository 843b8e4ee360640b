//! Statement parsing implementation
//!
//! This module handles statement sequences and every statement form:
//!
//! - Selection: `if ( expr ) { ... } else { ... }`
//! - Iteration: `while ( expr ) { ... }`
//! - Assignment and bare expressions: `x = expr ;`, `f ( a ) ;`
//! - Blocks: `{ ... }`
//! - Declarations (see `declarations`)
//! - Return: `return expr ;`
//!
//! # Grammar
//!
//! ```text
//! stmt_sequence ::= statement { [";"] statement }
//! statement     ::= if_stmt | while_stmt | assign_stmt | block
//!                 | declaration | return_stmt | ";" | NEWLINE
//! if_stmt       ::= "if" "(" expression ")" block [ "else" block ]
//! while_stmt    ::= "while" "(" expression ")" block
//! assign_stmt   ::= ( ID "=" expression | expression ) terminator
//! return_stmt   ::= "return" [ expression ] terminator
//! block         ::= "{" stmt_sequence "}"
//! terminator    ::= ";" | NEWLINE
//! ```
//!
//! Assignments and bare expressions must start with an identifier.
//!
//! The grammar is newline sensitive: a soft newline both ends a statement and
//! separates it from the next one, so `;` is only required between two
//! statements on the same line whose first one did not already end itself.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use tracing::trace;

impl Parser {
    /// Parse statements until end of input, `else`, `}` or `:)`
    pub(crate) fn parse_statement_sequence(&mut self) -> Vec<Node> {
        let mut statements = Vec::new();

        if self.at_sequence_end() {
            return statements;
        }
        statements.extend(self.parse_statement());

        while !self.at_sequence_end() {
            if !self.follows_terminator() && !self.check(TokenKind::Newline) {
                self.expect(TokenKind::Semicolon);
                if self.at_sequence_end() {
                    break;
                }
            }
            statements.extend(self.parse_statement());
        }

        statements
    }

    fn at_sequence_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Eof | TokenKind::Else | TokenKind::BodyEnd | TokenKind::RBrace
        )
    }

    /// Whether the last consumed token already closed a statement.
    fn follows_terminator(&self) -> bool {
        matches!(
            self.cursor.previous().map(|token| token.kind),
            Some(
                TokenKind::Semicolon | TokenKind::Newline | TokenKind::RBrace | TokenKind::BodyEnd
            )
        )
    }

    /// Parse a statement. Returns `None` for an empty statement (a lone `;`
    /// or an empty line) or a token no statement can start with; the latter
    /// is reported and skipped.
    pub(crate) fn parse_statement(&mut self) -> Option<Node> {
        trace!(token = %self.cursor.current(), "statement");

        match self.current_kind() {
            TokenKind::If => Some(Node::Statement(self.parse_select_statement())),
            TokenKind::While => Some(Node::Statement(self.parse_while_statement())),
            TokenKind::Ident => self.parse_assignment_statement(),
            TokenKind::LBrace => Some(Node::Statement(Stmt::Block(self.parse_block()))),
            kind if kind.is_type_specifier() => {
                Some(Node::Declaration(self.parse_declaration()))
            }
            TokenKind::Return => Some(Node::Statement(self.parse_return_statement())),
            TokenKind::Newline | TokenKind::Semicolon => {
                self.advance();
                None
            }
            _ => {
                self.unrecognized_start();
                None
            }
        }
    }

    /// Parse `ID = expression` or a bare expression, then the terminator
    fn parse_assignment_statement(&mut self) -> Option<Node> {
        let location = self.current_location();

        let node = if self.cursor.peek(1).is(TokenKind::Assign) {
            let name = self.expect_identifier();
            let target = Expr::new(ExprKind::Identifier(name), location);
            self.advance(); // consume '='
            let value = self.parse_expression();
            Some(Node::Statement(Stmt::Assign {
                target,
                value,
                location,
            }))
        } else {
            self.parse_expression().map(Node::Expression)
        };

        self.expect_terminator();
        node
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Stmt {
        let location = self.current_location();
        self.advance(); // consume 'return'

        let value = if self.at_statement_end() {
            None
        } else {
            self.parse_expression()
        };

        self.expect_terminator();

        Stmt::Return { value, location }
    }

    fn at_statement_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Semicolon
                | TokenKind::Newline
                | TokenKind::RBrace
                | TokenKind::BodyEnd
                | TokenKind::Eof
        )
    }

    /// Parse if statement
    fn parse_select_statement(&mut self) -> Stmt {
        let location = self.current_location();
        self.advance(); // consume 'if'

        let condition = self.parse_condition();
        let then_branch = self.parse_block();

        let else_branch = if self.check_past_newlines(TokenKind::Else) {
            self.skip_newlines();
            self.advance(); // consume 'else'
            Some(self.parse_block())
        } else {
            None
        };

        Stmt::Select {
            condition,
            then_branch,
            else_branch,
            location,
        }
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Stmt {
        let location = self.current_location();
        self.advance(); // consume 'while'

        let condition = self.parse_condition();
        let body = self.parse_block();

        Stmt::While {
            condition,
            body,
            location,
        }
    }

    /// Parse the parenthesized condition of `if` and `while`
    fn parse_condition(&mut self) -> Option<Expr> {
        self.expect(TokenKind::LParen);
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen);
        condition
    }

    /// Parse a braced block; soft newlines before the `{` are skipped
    pub(crate) fn parse_block(&mut self) -> Block {
        self.skip_newlines();
        let location = self.current_location();

        if !self.enter_nesting() {
            return Block {
                statements: Vec::new(),
                location,
            };
        }
        self.expect(TokenKind::LBrace);
        let statements = self.parse_statement_sequence();
        self.expect(TokenKind::RBrace);
        self.exit_nesting();

        Block {
            statements,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    fn parse_ok(listing: &str) -> Vec<Node> {
        let mut parser = Parser::from_listing(listing);
        let program = parser.parse_program();
        let messages: Vec<String> = parser.diagnostics().iter().map(|d| d.to_string()).collect();
        assert!(messages.is_empty(), "unexpected diagnostics: {:?}", messages);
        program.nodes
    }

    #[test]
    fn test_while_statement() {
        let nodes = parse_ok("while ( i < 10 ) {\n  i = i + 1\n}");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            Node::Statement(Stmt::While {
                condition: Some(condition),
                body,
                ..
            }) => {
                assert!(matches!(
                    condition.kind,
                    ExprKind::BinaryOp { op: BinOp::Lt, .. }
                ));
                assert_eq!(body.statements.len(), 1);
            }
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_else_on_next_line() {
        let nodes = parse_ok("if ( a ) {\n  b = 1\n}\nelse {\n  b = 2\n}");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(
            &nodes[0],
            Node::Statement(Stmt::Select {
                else_branch: Some(_),
                ..
            })
        ));
    }

    #[test]
    fn test_empty_block() {
        let nodes = parse_ok("{ }");
        assert!(matches!(
            &nodes[0],
            Node::Statement(Stmt::Block(Block { statements, .. })) if statements.is_empty()
        ));
    }

    #[test]
    fn test_nested_blocks_need_no_separator() {
        let nodes = parse_ok("{ { x = 1 ; } y = 2 ; }");
        match &nodes[0] {
            Node::Statement(Stmt::Block(block)) => assert_eq!(block.statements.len(), 2),
            other => panic!("Expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_return_without_value() {
        let nodes = parse_ok("return ;");
        assert!(matches!(
            &nodes[0],
            Node::Statement(Stmt::Return { value: None, .. })
        ));
    }

    #[test]
    fn test_bare_call_statement() {
        let nodes = parse_ok("print ( x ) ;");
        match &nodes[0] {
            Node::Expression(Expr {
                kind: ExprKind::Call { callee, args },
                ..
            }) => {
                assert_eq!(callee, "print");
                assert_eq!(args.len(), 1);
            }
            other => panic!("Expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_semicolons_are_empty_statements() {
        let nodes = parse_ok("x = 1 ; ; y = 2 ; ;");
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_assignment_target_is_identifier_node() {
        let nodes = parse_ok("  total = 0");
        match &nodes[0] {
            Node::Statement(Stmt::Assign { target, .. }) => {
                assert_eq!(target.kind, ExprKind::Identifier("total".to_string()));
                assert_eq!(target.location, SourceLocation::new(1, 3));
                assert_eq!(target.ty, None);
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_lines() {
        let nodes = parse_ok("x = 1\n\ny = 2");
        assert_eq!(nodes[0].location().line, 1);
        assert_eq!(nodes[1].location().line, 3);
    }
}
