//! Static type checking for the Clite AST.
//!
//! This module walks the already-built AST in a second, independent pass
//! and validates it against the declared types:
//!
//! - Rejecting duplicate declarations
//! - Resolving every variable use through the type map
//! - Computing the static type of every expression
//! - Enforcing operand categories for each operator
//! - Requiring bool tests on conditionals and loops
//!
//! The checker never mutates the AST; a run either passes or stops at the
//! first violation.

pub mod type_checker;
