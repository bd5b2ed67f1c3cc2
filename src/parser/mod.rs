//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens into
//! top-level items. Binary expressions are resolved by precedence climbing
//! over a configurable operator table, and it handles:
//!
//! - Primary expressions (numbers, variables, calls, grouping)
//! - Binary expressions with precedence and left associativity
//! - Prototypes, definitions and extern declarations
//! - One-token skip recovery at the top level
//!
//! All parse functions return `Result`s and propagate failures with `?`; the
//! driver loop in [`parser::parse`] is the only recovery point.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
