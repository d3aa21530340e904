use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::ast::StmtType,
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A recorded syntax problem together with where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_inner(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Wraps the error as the failure of a whole statement, keeping its position.
    pub fn wrap_statement(self, kind: StmtType) -> Self {
        Error {
            internal_error: ErrorImpl::StatementFailed {
                kind,
                inner: Box::new(self.internal_error),
            },
            position: self.position,
        }
    }

    pub fn get_error_name(&self) -> &str {
        self.internal_error.get_error_name()
    }

    pub fn get_tip(&self) -> ErrorTip {
        self.internal_error.get_tip()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, got {actual}")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        literal: String,
    },
    #[error("no prefix parser found for token {token}")]
    NoPrefixParser { token: Token },
    #[error("could not parse {literal} as integer")]
    NumberParseError { literal: String },
    #[error("parsing {kind} statement failed: {inner}")]
    StatementFailed {
        kind: StmtType,
        #[source]
        inner: Box<ErrorImpl>,
    },
}

impl ErrorImpl {
    pub fn get_error_name(&self) -> &str {
        match self {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParser { .. } => "NoPrefixParser",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::StatementFailed { .. } => "StatementFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ErrorImpl::UnexpectedToken {
                expected,
                actual: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(format!("Unexpected end of input, expected {}", expected)),
            ErrorImpl::UnexpectedToken {
                expected, literal, ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token `{}`, expected {}",
                literal, expected
            )),
            ErrorImpl::NoPrefixParser { token } if token.kind == TokenKind::EOF => {
                ErrorTip::Suggestion(String::from("Unexpected end of input, expected an expression"))
            }
            ErrorImpl::NoPrefixParser { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token.literal
            )),
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::StatementFailed { inner, .. } => inner.get_tip(),
        }
    }
}
