use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{BooleanLiteral, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Shared by every statement and expression: renders to canonical text via
/// `Display` and reports the token it originated from.
pub trait Node: Display + Debug {
    /// Returns the literal of the token the node was built from.
    fn token_literal(&self) -> &str;
    /// Returns the span of the originating token.
    fn get_span(&self) -> &Span;
}

/// Statement Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum StmtType {
    Let,
    Return,
    Expression,
}

impl Display for StmtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StmtType::Let => write!(f, "let"),
            StmtType::Return => write!(f, "return"),
            StmtType::Expression => write!(f, "expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Statement::Let(_) => StmtType::Let,
            Statement::Return(_) => StmtType::Return,
            Statement::Expression(_) => StmtType::Expression,
        }
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Statement::Let(stmt) => stmt,
            Statement::Return(stmt) => stmt,
            Statement::Expression(stmt) => stmt,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_node())
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Integer,
    Boolean,
    Prefix,
    Infix,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expression::Identifier(_) => ExprType::Identifier,
            Expression::Integer(_) => ExprType::Integer,
            Expression::Boolean(_) => ExprType::Boolean,
            Expression::Prefix(_) => ExprType::Prefix,
            Expression::Infix(_) => ExprType::Infix,
        }
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Expression::Identifier(expr) => expr,
            Expression::Integer(expr) => expr,
            Expression::Boolean(expr) => expr,
            Expression::Prefix(expr) => expr,
            Expression::Infix(expr) => expr,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_node())
    }
}

/// Root of a parsed source: its statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
