//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into the token
//! sequence the parser reads. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, numbers and operator characters
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! It also defines the [`stream::TokenStream`] contract the parser consumes.

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
