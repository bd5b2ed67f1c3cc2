//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the lexer, the parser and
//! the precedence table. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and configuration
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
