//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! The parser pulls tokens lazily from a [`Lexer`], holding exactly one
//! current and one peek token, and records errors instead of stopping at
//! the first one.

use std::mem;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{lookups::binding_power, lookups::BindingPower, stmt::parse_stmt};

/// The main parser structure that maintains parsing state.
///
/// `peek_token` is always the token immediately following `current_token`
/// in source order.
pub struct Parser {
    /// Source of tokens, consumed on demand
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser and fills the current and peek tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token.kind)
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek_token, next);
        mem::replace(&mut self.current_token, peek)
    }

    /// Advances only if the peek token has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns an `UnexpectedToken` error positioned at the peek token
    /// otherwise, leaving the parser where it was.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        let token = &self.peek_token;
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    actual: token.kind,
                    literal: token.literal.clone(),
                },
                token.span.start.clone(),
            ));
        }

        self.advance();
        Ok(())
    }

    /// Skips to the end of the current statement: a `;`, end of input, or
    /// the token before a keyword that opens the next statement.
    pub fn synchronize(&mut self) {
        while !self
            .current_token
            .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
            && !self
                .peek_token
                .is_one_of_many(&[TokenKind::Let, TokenKind::Return])
        {
            self.advance();
        }
    }

    pub fn add_error(&mut self, error: Error) {
        debug!("recorded parse error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses statements until end of input.
    ///
    /// A statement that fails structurally is recorded as an error and
    /// skipped up to its terminating `;` or the next `let`/`return`;
    /// parsing then resumes.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.add_error(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors in {}",
            program.len(),
            self.errors.len(),
            self.lexer.get_file()
        );

        program
    }

    /// Consumes the parser, returning the program and every recorded error.
    pub fn parse(mut self) -> (Program, Vec<Error>) {
        let program = self.parse_program();
        (program, self.errors)
    }
}

/// Parses a source string into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It never fails: the returned
/// program holds every statement that parsed, and the error list holds
/// every problem found along the way, in source order.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Optional label for the source, used in positions
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    Parser::new(Lexer::new(source, file)).parse()
}
