//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization, one character of lookahead at a time
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
