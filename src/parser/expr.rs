use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanLiteral, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_lookup, nud_lookup, BindingPower},
    parser::Parser,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Returns `None` when no expression could be built; the reason has
/// already been recorded on the parser.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let Some(nud) = nud_lookup(parser.current_token_kind()) else {
        no_prefix_parser(parser);
        return None;
    };

    let mut left = nud(parser)?;

    // Equal powers stop the loop, so same-level operators nest to the left
    while parser.peek_token_kind() != TokenKind::Semicolon && bp < parser.peek_binding_power() {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        let operator_bp = binding_power(parser.current_token_kind());
        left = led(parser, left, operator_bp);
    }

    Some(left)
}

fn no_prefix_parser(parser: &mut Parser) {
    let error = Error::new(
        ErrorImpl::NoPrefixParser {
            token: parser.current_token().clone(),
        },
        parser.get_position(),
    );
    parser.add_error(error);
}

pub fn parse_primary_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Integer => match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                let error = Error::new(
                    ErrorImpl::NumberParseError {
                        literal: token.literal.clone(),
                    },
                    token.span.start.clone(),
                );
                parser.add_error(error);
                None
            }
        },
        TokenKind::Identifier => Some(Expression::Identifier(Identifier {
            value: token.literal.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Some(Expression::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => {
            no_prefix_parser(parser);
            None
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix).map(Box::new);

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Expression {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp).map(Box::new);

    Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let errors_before = parser.errors().len();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    // A failed operand already consumed what should have been the `)`
    if parser.errors().len() > errors_before {
        return Some(expr);
    }

    if let Err(error) = parser.expect_peek(TokenKind::CloseParen) {
        parser.add_error(error);
        return None;
    }

    Some(expr)
}
