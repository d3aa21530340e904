use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expression, Node},
    expressions::Identifier,
};

/// Let Statement
/// Binds `name` to `value`: `let <name> = <value>;`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.literal, value),
            None => write!(f, "{};", self.token.literal),
        }
    }
}

/// Expression Statement
/// A bare expression used as a statement. `token` is the first token of
/// the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(expression) = &self.expression {
            write!(f, "{}", expression)?;
        }
        Ok(())
    }
}
