// Integration tests for syntax errors and recovery

use cminus::parser::ast::*;
use cminus::parser::diagnostics::{Diagnostic, DiagnosticKind};
use cminus::parser::token::TokenKind;
use cminus::parser::token_list;
use cminus::parser::{Parser, ParserConfig};

fn parse_with_errors(listing: &str) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::from_listing(listing);
    let program = parser.parse_program();
    assert!(parser.had_error(), "expected diagnostics for {:?}", listing);
    (program, parser.into_diagnostics().into_vec())
}

#[test]
fn test_empty_condition() {
    let (program, diagnostics) = parse_with_errors("if ( ) { }");

    assert!(!diagnostics.is_empty());
    assert_eq!(program.nodes.len(), 1);
    match &program.nodes[0] {
        Node::Statement(Stmt::Select {
            condition,
            then_branch,
            else_branch,
            ..
        }) => {
            assert!(condition.is_none());
            assert!(then_branch.statements.is_empty());
            assert!(else_branch.is_none());
        }
        other => panic!("Expected partial if statement, got {:?}", other),
    }
}

#[test]
fn test_missing_separator_on_one_line() {
    let (program, diagnostics) = parse_with_errors("x = 1 y = 2");

    assert_eq!(program.nodes.len(), 2);
    assert!(diagnostics.iter().all(|d| matches!(
        d.kind,
        DiagnosticKind::Mismatch {
            expected: TokenKind::Semicolon,
            ..
        }
    )));
}

#[test]
fn test_unterminated_function_body() {
    let (program, diagnostics) = parse_with_errors("num f ( ) -> return 0 ;");

    assert!(matches!(
        &program.nodes[0],
        Node::Declaration(Decl::Function { body, .. }) if body.statements.len() == 1
    ));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Syntax error at line 1: unexpected token -> EOF (expected ':)')"
    );
}

#[test]
fn test_unclosed_argument_list() {
    let (program, diagnostics) = parse_with_errors("f ( a b c\ny = 1");

    assert_eq!(program.nodes.len(), 2);
    match &program.nodes[0] {
        Node::Expression(Expr {
            kind: ExprKind::Call { callee, args },
            ..
        }) => {
            assert_eq!(callee, "f");
            assert_eq!(args.len(), 3);
        }
        other => panic!("Expected call, got {:?}", other),
    }
    // two missing commas and the missing ')'
    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics.iter().all(|d| d.line() == 1));
}

#[test]
fn test_broken_parameter_list_still_yields_function() {
    let (program, _) = parse_with_errors("num f ( num a ; ) -> :)");

    assert!(matches!(
        &program.nodes[0],
        Node::Declaration(Decl::Function { name, params, .. }) if name == "f" && params.len() == 1
    ));
}

#[test]
fn test_unknown_tokens_are_skipped() {
    let (program, diagnostics) = parse_with_errors("x = 1 ;\n@ % ;\ny = 2 ;");

    assert_eq!(program.nodes.len(), 2);
    assert!(diagnostics
        .iter()
        .any(|d| matches!(&d.kind, DiagnosticKind::UnrecognizedStart { found } if found == "ERROR: @")));
    assert!(diagnostics.iter().all(|d| d.line() == 2));
}

#[test]
fn test_else_without_if() {
    let (program, diagnostics) = parse_with_errors("else { x = 1 ; }");

    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::UnrecognizedStart {
            found: "reserved word: else".to_string()
        }
    );
    assert!(matches!(
        &program.nodes[0],
        Node::Statement(Stmt::Block(block)) if block.statements.len() == 1
    ));
}

#[test]
fn test_statements_must_start_with_a_name() {
    let (program, diagnostics) = parse_with_errors("3 ;\ny = 1");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::UnrecognizedStart {
            found: "NUMBER, val= 3".to_string()
        }
    );
    assert_eq!(program.nodes.len(), 1);

    let (_, diagnostics) = parse_with_errors("( a ) ;");
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::UnrecognizedStart {
            found: "(".to_string()
        }
    );
}

#[test]
fn test_deeply_nested_blocks() {
    let listing = format!("{} x = 1 ; {}", "{ ".repeat(3000), "} ".repeat(3000));
    let (program, diagnostics) = parse_with_errors(&listing);

    assert_eq!(program.nodes.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::NestingTooDeep { limit: 256 });
}

#[test]
fn test_deeply_nested_parentheses() {
    let listing = format!("x = {} 1 {} ;", "( ".repeat(2000), ") ".repeat(2000));
    let (program, diagnostics) = parse_with_errors(&listing);

    assert!(matches!(&program.nodes[0], Node::Statement(Stmt::Assign { .. })));
    assert_eq!(
        diagnostics.last().map(|d| &d.kind),
        Some(&DiagnosticKind::NestingTooDeep { limit: 256 })
    );
}

#[test]
fn test_nesting_within_limit_parses() {
    let listing = format!("x = {} 1 {} ;", "( ".repeat(200), ") ".repeat(200));
    let mut parser = Parser::from_listing(&listing);
    let program = parser.parse_program();

    assert!(!parser.had_error());
    assert!(matches!(
        &program.nodes[0],
        Node::Statement(Stmt::Assign { value: Some(Expr { kind: ExprKind::Constant(1), .. }), .. })
    ));
}

#[test]
fn test_nesting_limit_is_configurable() {
    let config = ParserConfig::new().with_max_nesting(3);
    let tokens = token_list::read("num f ( ) -> { { x = a [ 0 ] ; } } :)");
    let mut parser = Parser::with_config(tokens, config);
    parser.parse_program();

    let kinds: Vec<DiagnosticKind> = parser.into_diagnostics().into_vec().into_iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::NestingTooDeep { limit: 3 }]);
}

#[test]
fn test_default_diagnostic_limit() {
    let listing = vec!["%"; 150].join(" ");
    let (program, diagnostics) = parse_with_errors(&listing);

    assert!(program.nodes.is_empty());
    assert_eq!(diagnostics.len(), 101);
    assert_eq!(
        diagnostics.last().map(|d| &d.kind),
        Some(&DiagnosticKind::TooManyErrors { limit: 100 })
    );
}

#[test]
fn test_configured_diagnostic_limit_keeps_partial_tree() {
    let config = ParserConfig::new().with_max_diagnostics(1);
    let tokens = token_list::read("num x ;\nnum y [ ] ;\nnum z ;");
    let mut parser = Parser::with_config(tokens, config);
    let program = parser.parse_program();

    // Parsing stops at the first error, after the array node was built
    assert_eq!(program.nodes.len(), 2);
    assert!(matches!(&program.nodes[1], Node::Declaration(Decl::Array { name, .. }) if name == "y"));
    assert_eq!(parser.diagnostics().len(), 2);
    assert!(parser.diagnostics().is_exhausted());
}
