use crate::{
    ast::ast::{Expression, Statement, StmtType},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // Reserved for call expressions
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Expression;

/// Statement handler for tokens that open a dedicated statement form.
/// Anything else is parsed as an expression statement.
pub fn stmt_lookup(kind: TokenKind) -> Option<(StmtType, StmtHandler)> {
    match kind {
        TokenKind::Let => Some((StmtType::Let, parse_let_stmt as StmtHandler)),
        TokenKind::Return => Some((StmtType::Return, parse_return_stmt as StmtHandler)),
        _ => None,
    }
}

/// Null denotation (prefix) handlers.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Integer
        | TokenKind::Identifier
        | TokenKind::True
        | TokenKind::False => Some(parse_primary_expr),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        _ => None,
    }
}

/// Left denotation (infix) handlers.
pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => Some(parse_binary_expr),
        _ => None,
    }
}

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        _ => BindingPower::Lowest,
    }
}
