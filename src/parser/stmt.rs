use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::{stmt_lookup, BindingPower},
    parser::Parser,
};

/// Parses one statement starting at the current token.
///
/// Structural failures are returned wrapped with the statement kind; the
/// parser is left on the offending token's predecessor.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some((kind, handler)) = stmt_lookup(parser.current_token_kind()) {
        return handler(parser).map_err(|error| error.wrap_statement(kind));
    }

    Ok(parse_expression_stmt(parser))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Statement {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    // Trailing semicolon is optional
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Statement::Expression(ExpressionStatement { token, expression })
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let errors_before = parser.errors().len();
    let value = parse_expr(parser, BindingPower::Lowest);
    terminate_stmt(parser, errors_before)?;

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
        return Ok(Statement::Return(ReturnStatement { token, value: None }));
    }

    parser.advance();

    let errors_before = parser.errors().len();
    let value = parse_expr(parser, BindingPower::Lowest);
    terminate_stmt(parser, errors_before)?;

    Ok(Statement::Return(ReturnStatement { token, value }))
}

/// Requires the `;` after a statement value. When any part of the value
/// failed, its error is already recorded, so skip ahead instead of
/// reporting again.
fn terminate_stmt(parser: &mut Parser, errors_before: usize) -> Result<(), Error> {
    if parser.errors().len() > errors_before {
        parser.synchronize();
        return Ok(());
    }

    parser.expect_peek(TokenKind::Semicolon)
}
