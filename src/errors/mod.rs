//! Error types and error handling for the front end.
//!
//! This module defines the errors recorded while tokenizing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax problem
//! - Helpful error messages and suggestions

pub mod errors;
