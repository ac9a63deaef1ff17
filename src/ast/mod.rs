/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root, declarations and the indented AST dump
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - types: The four scalar types of the language
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
