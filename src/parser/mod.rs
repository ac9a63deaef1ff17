//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. Each grammar production
//! is one function, driven by a single token of lookahead:
//!
//! - Program header, declarations and types (parser)
//! - Statement parsing (stmt)
//! - Expression parsing with the precedence ladder (expr)
//!
//! Parsing fails on the first mismatch between the token stream and the
//! grammar; there is no error recovery.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
