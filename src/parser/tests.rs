//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Let and return statements
//! - Expression statements and operator precedence
//! - Prefix operators, grouping and literals
//! - Error recording and recovery

use crate::ast::ast::{ExprType, Expression, Node, Program, Statement, StmtType};
use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::lexer::Lexer;

use super::parser::{parse, Parser};

fn parse_source(source: &str) -> (Program, Vec<Error>) {
    parse(source.to_string(), Some("test.lang".to_string()))
}

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse_source(source);
    assert!(errors.is_empty(), "unexpected errors for {:?}: {:?}", source, errors);
    program
}

fn error_messages(errors: &[Error]) -> Vec<String> {
    errors.iter().map(|error| error.to_string()).collect()
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok(
        "
        let foo = 1337;
        let boo = 1000000;
        let x = 2;
        ",
    );

    assert_eq!(program.len(), 3);

    let identifiers = ["foo", "boo", "x"];
    for (stmt, identifier) in program.statements.iter().zip(identifiers) {
        assert_eq!(stmt.token_literal(), "let");
        assert_eq!(stmt.get_stmt_type(), StmtType::Let);

        let Statement::Let(let_stmt) = stmt else {
            panic!("expected let statement, got {:?}", stmt);
        };
        assert_eq!(let_stmt.name.value, identifier);
    }
}

#[test]
fn test_let_statement_value_rendering() {
    let cases = [
        ("let x = 5;", "x", "5"),
        ("let y = true;", "y", "true"),
        ("let foobar = y;", "foobar", "y"),
        ("let z = 1 + 2 * 3;", "z", "(1 + (2 * 3))"),
        ("let w = -(a + b);", "w", "(-(a + b))"),
    ];

    for (source, name, value) in cases {
        let program = parse_ok(source);
        assert_eq!(program.len(), 1);

        let Statement::Let(let_stmt) = &program.statements[0] else {
            panic!("expected let statement for {:?}", source);
        };
        assert_eq!(let_stmt.name.value, name);
        assert_eq!(let_stmt.value.as_ref().unwrap().to_string(), value);
        assert_eq!(
            program.to_string(),
            format!("let {} = {};", name, value)
        );
    }
}

#[test]
fn test_parse_let_statements_with_errors() {
    let (program, errors) = parse_source(
        "
        let = 1337;
        let boo 1000000;
        let 200;
        let x;
        ",
    );

    assert!(program.is_empty());
    assert_eq!(
        error_messages(&errors),
        vec![
            "parsing let statement failed: expected IDENTIFIER, got =",
            "parsing let statement failed: expected =, got INT",
            "parsing let statement failed: expected IDENTIFIER, got INT",
            "parsing let statement failed: expected =, got ;",
        ]
    );
}

#[test]
fn test_each_malformed_let_yields_one_error() {
    let cases = [
        ("let = 1337;", "expected IDENTIFIER, got ="),
        ("let boo 1000000;", "expected =, got INT"),
        ("let 200;", "expected IDENTIFIER, got INT"),
        ("let x;", "expected =, got ;"),
    ];

    for (source, expected) in cases {
        let (program, errors) = parse_source(source);

        assert_eq!(program.len(), 0, "statements for {:?}", source);
        assert_eq!(errors.len(), 1, "errors for {:?}: {:?}", source, errors);

        match errors[0].get_inner() {
            ErrorImpl::StatementFailed { kind, inner } => {
                assert_eq!(*kind, StmtType::Let);
                assert_eq!(inner.to_string(), expected);
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
    }
}

#[test]
fn test_recovery_keeps_following_statements() {
    let (program, errors) = parse_source("let = 1; let y = 2; y");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 2;y");
}

#[test]
fn test_let_requires_semicolon() {
    let (program, errors) = parse_source("let x = 5 6; x");

    assert_eq!(
        error_messages(&errors),
        vec!["parsing let statement failed: expected ;, got INT"]
    );
    assert_eq!(program.to_string(), "x");
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok(
        "
        return 1;
        return x;
        return;
        return a * (b - 1);
        ",
    );

    assert_eq!(program.len(), 4);
    for stmt in &program.statements {
        assert_eq!(stmt.get_stmt_type(), StmtType::Return);
        assert_eq!(stmt.token_literal(), "return");
    }
    assert_eq!(
        program.to_string(),
        "return 1;return x;return;return (a * (b - 1));"
    );
}

#[test]
fn test_return_without_semicolon_at_end_of_input() {
    let (_, errors) = parse_source("return 5");

    assert_eq!(
        error_messages(&errors),
        vec!["parsing return statement failed: expected ;, got EOF"]
    );
}

#[test]
fn test_identifier_expression() {
    let program = parse_ok("foo;");
    assert_eq!(program.len(), 1);

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Some(Expression::Identifier(ident)) = &stmt.expression else {
        panic!("expected identifier, got {:?}", stmt.expression);
    };
    assert_eq!(ident.value, "foo");
    assert_eq!(ident.token_literal(), "foo");
}

#[test]
fn test_literal_expressions() {
    let program = parse_ok("5; true; false;");
    let types: Vec<ExprType> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Expression(stmt) => stmt.expression.as_ref().unwrap().get_expr_type(),
            other => panic!("expected expression statement, got {:?}", other),
        })
        .collect();

    assert_eq!(types, vec![ExprType::Integer, ExprType::Boolean, ExprType::Boolean]);

    let Statement::Expression(stmt) = &program.statements[0] else {
        unreachable!();
    };
    let Some(Expression::Integer(integer)) = &stmt.expression else {
        panic!("expected integer literal");
    };
    assert_eq!(integer.value, 5);
}

#[test]
fn test_missing_trailing_semicolon_is_tolerated() {
    let program = parse_ok("let a = 1; a + 1");

    assert_eq!(program.len(), 2);
    assert_eq!(program.statements[1].get_stmt_type(), StmtType::Expression);
    assert_eq!(program.statements[1].to_string(), "(a + 1)");
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("1 / 2 * 3", "((1 / 2) * 3)"),
        ("1 < 2 * 3", "(1 < (2 * 3))"),
        ("1 + 2 + 3", "((1 + 2) + 3)"),
        ("1 - 2 - 3", "((1 - 2) - 3)"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
        ("-5", "(-5)"),
        ("!foo", "(!foo)"),
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true == !false", "(true == (!false))"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("((a))", "a"),
    ];

    for (source, expected) in cases {
        let program = parse_ok(source);
        assert_eq!(program.to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_semicolon_splits_expressions() {
    let program = parse_ok("a + b; -c");

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "(a + b)(-c)");
}

#[test]
fn test_no_prefix_parser_error() {
    let (program, errors) = parse_source(")");

    assert_eq!(
        error_messages(&errors),
        vec!["no prefix parser found for token Token {kind: ), literal: )}"]
    );
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_absent_operand_does_not_crash() {
    let (program, errors) = parse_source("-;");

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].get_inner(), ErrorImpl::NoPrefixParser { .. }));
    assert_eq!(program.to_string(), "(-)");

    let (program, errors) = parse_source("1 +");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "(1 + )");
}

#[test]
fn test_invalid_character_reports_missing_prefix_parser() {
    let (_, errors) = parse_source("let x = @;");

    assert_eq!(
        error_messages(&errors),
        vec!["no prefix parser found for token Token {kind: INVALID, literal: @}"]
    );
}

#[test]
fn test_integer_overflow_is_recorded() {
    let (program, errors) = parse_source("let big = 9223372036854775808;");

    assert_eq!(
        error_messages(&errors),
        vec!["could not parse 9223372036854775808 as integer"]
    );
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "let big = ;");

    let program = parse_ok("9223372036854775807");
    assert_eq!(program.to_string(), "9223372036854775807");
}

#[test]
fn test_unclosed_group() {
    let (_, errors) = parse_source("(1 + 2");

    assert_eq!(error_messages(&errors), vec!["expected ), got EOF"]);
}

#[test]
fn test_error_positions_point_at_offending_token() {
    let (_, errors) = parse_source("let x = 1;\nlet 200;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_position().0, 15);
    assert_eq!(*errors[0].get_position().1, "test.lang");
}

#[test]
fn test_parser_holds_current_and_peek() {
    let mut parser = Parser::new(Lexer::new("let x = 1;".to_string(), None));

    assert_eq!(parser.current_token().literal, "let");
    assert_eq!(parser.peek_token().literal, "x");

    let previous = parser.advance();
    assert_eq!(previous.literal, "let");
    assert_eq!(parser.current_token().literal, "x");
    assert_eq!(parser.peek_token().literal, "=");

    // Parsing resumes mid-statement, so `=` cannot start an expression
    let program = parser.parse_program();
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.len(), 3);
    assert_eq!(program.to_string(), "x1");
}

#[test]
fn test_empty_program() {
    let program = parse_ok("   \n\t ");

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_partially_failed_value_yields_one_error() {
    let cases = [
        ("let x = 1 + ;", "let x = (1 + );"),
        ("let x = -; let y = 2;", "let x = (-);let y = 2;"),
        ("return 1 * ;", "return (1 * );"),
        ("return -;", "return (-);"),
        ("let x = 1 + ) 2; x", "let x = (1 + );x"),
    ];

    for (source, rendered) in cases {
        let (program, errors) = parse_source(source);

        assert_eq!(errors.len(), 1, "errors for {:?}: {:?}", source, errors);
        assert!(
            matches!(errors[0].get_inner(), ErrorImpl::NoPrefixParser { .. }),
            "source: {:?}",
            source
        );
        assert_eq!(program.to_string(), rendered, "source: {:?}", source);
    }
}

#[test]
fn test_missing_semicolon_recovers_at_next_statement() {
    let cases = [
        (
            "let x = 5 let y = 2;",
            "parsing let statement failed: expected ;, got LET",
            "let y = 2;",
        ),
        (
            "return 1 return 2;",
            "parsing return statement failed: expected ;, got RETURN",
            "return 2;",
        ),
        (
            "let let x = 1;",
            "parsing let statement failed: expected IDENTIFIER, got LET",
            "let x = 1;",
        ),
        (
            "let a 1 2 return a;",
            "parsing let statement failed: expected =, got INT",
            "return a;",
        ),
    ];

    for (source, error, rendered) in cases {
        let (program, errors) = parse_source(source);

        assert_eq!(error_messages(&errors), vec![error], "source: {:?}", source);
        assert_eq!(program.to_string(), rendered, "source: {:?}", source);
    }
}

#[test]
fn test_failed_operand_inside_group_is_not_reported_twice() {
    let (program, errors) = parse_source("(1 +)");

    assert_eq!(
        error_messages(&errors),
        vec!["no prefix parser found for token Token {kind: ), literal: )}"]
    );
    assert_eq!(program.to_string(), "(1 + )");

    let (program, errors) = parse_source("(1 +) * 2;");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "((1 + ) * 2)");
}
