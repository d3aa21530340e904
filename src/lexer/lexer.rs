use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("^[a-zA-Z]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Forward-only cursor over a source string, producing tokens on demand.
///
/// Once the input is exhausted every call to [`Lexer::next_token`] returns
/// an `EOF` token. A lexer cannot be rewound; build a new one to re-scan.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token, skipping any leading whitespace.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;

        let Some(ch) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_from(start));
        };

        let (kind, literal) = match ch {
            '=' if self.peek() == Some('=') => (TokenKind::Equals, self.take(2)),
            '=' => (TokenKind::Assignment, self.take(1)),
            '!' if self.peek() == Some('=') => (TokenKind::NotEquals, self.take(2)),
            '!' => (TokenKind::Not, self.take(1)),
            '+' => (TokenKind::Plus, self.take(1)),
            '-' => (TokenKind::Dash, self.take(1)),
            '*' => (TokenKind::Star, self.take(1)),
            '/' => (TokenKind::Slash, self.take(1)),
            '<' => (TokenKind::Less, self.take(1)),
            '>' => (TokenKind::Greater, self.take(1)),
            '(' => (TokenKind::OpenParen, self.take(1)),
            ')' => (TokenKind::CloseParen, self.take(1)),
            '{' => (TokenKind::OpenCurly, self.take(1)),
            '}' => (TokenKind::CloseCurly, self.take(1)),
            ',' => (TokenKind::Comma, self.take(1)),
            ';' => (TokenKind::Semicolon, self.take(1)),
            c if c.is_ascii_alphabetic() => {
                let word = self.scan(&WORD_PATTERN);
                (lookup_identifier(&word), word)
            }
            c if c.is_ascii_digit() => (TokenKind::Integer, self.scan(&INTEGER_PATTERN)),
            c => (TokenKind::Invalid, self.take(c.len_utf8())),
        };

        trace!("lexed {} ({}) at {}", kind, literal, start);

        MK_TOKEN!(kind, literal, self.span_from(start))
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.at() {
            self.advance_n(1);
        }
    }

    /// Consumes `n` bytes and returns them as the token literal.
    fn take(&mut self, n: usize) -> String {
        let literal = self.source[self.pos..self.pos + n].to_string();
        self.advance_n(n);
        literal
    }

    fn scan(&mut self, pattern: &Regex) -> String {
        let len = pattern.find(self.remainder()).map_or(0, |m| m.end());
        self.take(len)
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: Position::at(start, Rc::clone(&self.file)),
            end: Position::at(self.pos, Rc::clone(&self.file)),
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenizes a whole source string, including the trailing `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
