//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, the `parse` entry point,
//! and the productions for the program header and the declaration list.
//! The parser is a predictive recursive-descent parser: every grammar rule
//! is one function, and the single token of lookahead decides which
//! alternative to take.

use crate::{
    ast::{
        ast::{Declaration, Declarations, Program},
        expressions::Variable,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_statements;

/// The parser's entire mutable state: the token stream and the cursor
/// marking the current lookahead token.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current lookahead token without consuming it.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// The core `match` primitive of the grammar.
    ///
    /// Consumes and returns the current token if its kind equals
    /// `expected_kind`; otherwise reports a syntax error naming both the
    /// expected kind and the actual token. Keeping the error in the
    /// `Result` channel frees every call site of explicit branching.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::SyntaxError {
                    expected: expected_kind.to_string(),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }
}

/// Parses a complete token stream into a Program.
///
/// Fails with the first syntax error encountered; parsing is not
/// resumable after a failure.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    let program = parse_program(&mut parser)?;

    // Anything after the closing brace of main is a syntax error.
    parser.expect(TokenKind::EOF)?;

    Ok(program)
}

/// Program --> int main ( ) { Declarations Block }
fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let header = [
        TokenKind::Int,
        TokenKind::Main,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
    ];
    for kind in header {
        parser.expect(kind)?;
    }

    let declarations = parse_declarations(parser)?;
    let body = parse_statements(parser)?;

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Program::new(declarations, body))
}

/// Declarations --> { Declaration }
pub fn parse_declarations(parser: &mut Parser) -> Result<Declarations, Error> {
    let mut declarations = Declarations::new();

    while parser.current_token_kind().is_type_keyword() {
        parse_declaration(parser, &mut declarations)?;
    }

    Ok(declarations)
}

/// Declaration --> Type Identifier { , Identifier } ;
fn parse_declaration(parser: &mut Parser, declarations: &mut Declarations) -> Result<(), Error> {
    let ty = parse_type(parser)?;

    let name = parser.expect(TokenKind::Identifier)?.value;
    declarations.push(Declaration::new(Variable::new(name), ty));

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        let name = parser.expect(TokenKind::Identifier)?.value;
        declarations.push(Declaration::new(Variable::new(name), ty));
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

/// Type --> int | bool | float | char
fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let ty = match parser.current_token_kind() {
        TokenKind::Int => Type::Int,
        TokenKind::Bool => Type::Bool,
        TokenKind::Float => Type::Float,
        TokenKind::Char => Type::Char,
        _ => {
            let token = parser.current_token();
            return Err(Error::new(
                ErrorImpl::SyntaxError {
                    expected: String::from("Type"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }
    };

    parser.advance();
    Ok(ty)
}
