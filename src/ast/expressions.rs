use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expression, Node};

// LITERALS

/// Identifier
/// A reference to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// A signed 64-bit integer constant.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Boolean Literal
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator (`!` or `-`) applied to its operand.
/// The operand is absent when it failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.right {
            Some(right) => write!(f, "({}{})", self.operator, right),
            None => write!(f, "({})", self.operator),
        }
    }
}

/// Infix Expression
/// A binary operator; `token` is the operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.right {
            Some(right) => write!(f, "({} {} {})", self.left, self.operator, right),
            None => write!(f, "({} {} )", self.left, self.operator),
        }
    }
}
