use crate::{
    ast::{
        expressions::Variable,
        statements::{Block, Statement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

/// Statement --> ; | Block | Assignment | Conditional | Loop
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            Ok(Statement::Skip)
        }
        TokenKind::OpenCurly => {
            parser.advance();
            let block = parse_statements(parser)?;
            parser.expect(TokenKind::CloseCurly)?;
            Ok(Statement::Block(block))
        }
        TokenKind::Identifier => parse_assignment(parser),
        TokenKind::If => parse_conditional(parser),
        TokenKind::While => parse_loop(parser),
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::SyntaxError {
                    expected: String::from("Statement"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}

/// Block --> { Statement }
///
/// The braces themselves are matched by the callers (program header and
/// the Block alternative of Statement), so this only collects members
/// until the closing brace.
pub fn parse_statements(parser: &mut Parser) -> Result<Block, Error> {
    let mut block = Block::new();

    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        block.members.push(parse_stmt(parser)?);
    }

    Ok(block)
}

/// Assignment --> Identifier = Expression ;
fn parse_assignment(parser: &mut Parser) -> Result<Statement, Error> {
    let target = Variable::new(parser.expect(TokenKind::Identifier)?.value);

    parser.expect(TokenKind::Assign)?;
    let source = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Assignment { target, source })
}

/// Conditional --> if ( Expression ) Statement [ else Statement ]
fn parse_conditional(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_branch = parse_stmt(parser)?;

    // A missing else clause becomes a Skip branch.
    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_stmt(parser)?
    } else {
        Statement::Skip
    };

    Ok(Statement::Conditional {
        test,
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

/// Loop --> while ( Expression ) Statement
fn parse_loop(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Statement::Loop {
        test,
        body: Box::new(body),
    })
}
