use crate::{
    ast::expressions::{Expression, Operator, Value, Variable},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Expression --> Conjunction { || Conjunction }
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, Error> {
    let mut e = parse_conjunction(parser)?;

    while parser.current_token_kind() == TokenKind::Or {
        let op = Operator::new(parser.advance().value.clone());
        let right = parse_conjunction(parser)?;
        e = Expression::Binary {
            op,
            left: Box::new(e),
            right: Box::new(right),
        };
    }

    Ok(e)
}

/// Conjunction --> Equality { && Equality }
fn parse_conjunction(parser: &mut Parser) -> Result<Expression, Error> {
    let mut e = parse_equality(parser)?;

    while parser.current_token_kind() == TokenKind::And {
        let op = Operator::new(parser.advance().value.clone());
        let right = parse_equality(parser)?;
        e = Expression::Binary {
            op,
            left: Box::new(e),
            right: Box::new(right),
        };
    }

    Ok(e)
}

/// Equality --> Relation [ ( == | != ) Relation ]
///
/// At most one operator; equality does not chain.
fn parse_equality(parser: &mut Parser) -> Result<Expression, Error> {
    let e = parse_relation(parser)?;

    if is_equality_op(parser.current_token_kind()) {
        let op = Operator::new(parser.advance().value.clone());
        let right = parse_relation(parser)?;
        return Ok(Expression::Binary {
            op,
            left: Box::new(e),
            right: Box::new(right),
        });
    }

    Ok(e)
}

/// Relation --> Addition [ ( < | <= | > | >= ) Addition ]
///
/// At most one operator; `a < b < c` is a grammar error, not a parse of
/// `(a < b) < c`.
fn parse_relation(parser: &mut Parser) -> Result<Expression, Error> {
    let e = parse_addition(parser)?;

    if is_relational_op(parser.current_token_kind()) {
        let op = Operator::new(parser.advance().value.clone());
        let right = parse_addition(parser)?;
        return Ok(Expression::Binary {
            op,
            left: Box::new(e),
            right: Box::new(right),
        });
    }

    Ok(e)
}

/// Addition --> Term { ( + | - ) Term }
fn parse_addition(parser: &mut Parser) -> Result<Expression, Error> {
    let mut e = parse_term(parser)?;

    while is_add_op(parser.current_token_kind()) {
        let op = Operator::new(parser.advance().value.clone());
        let right = parse_term(parser)?;
        e = Expression::Binary {
            op,
            left: Box::new(e),
            right: Box::new(right),
        };
    }

    Ok(e)
}

/// Term --> Factor { ( * | / ) Factor }
fn parse_term(parser: &mut Parser) -> Result<Expression, Error> {
    let mut e = parse_factor(parser)?;

    while is_multiply_op(parser.current_token_kind()) {
        let op = Operator::new(parser.advance().value.clone());
        let right = parse_factor(parser)?;
        e = Expression::Binary {
            op,
            left: Box::new(e),
            right: Box::new(right),
        };
    }

    Ok(e)
}

/// Factor --> [ ( ! | - ) ] Primary
fn parse_factor(parser: &mut Parser) -> Result<Expression, Error> {
    if is_unary_op(parser.current_token_kind()) {
        let op = Operator::new(parser.advance().value.clone());
        let term = parse_primary(parser)?;
        return Ok(Expression::Unary {
            op,
            term: Box::new(term),
        });
    }

    parse_primary(parser)
}

/// Primary --> Identifier | Literal | ( Expression ) | Type ( Expression )
fn parse_primary(parser: &mut Parser) -> Result<Expression, Error> {
    let kind = parser.current_token_kind();

    if kind == TokenKind::Identifier {
        let name = parser.advance().value.clone();
        return Ok(Expression::Variable(Variable::new(name)));
    }

    if kind.is_literal() {
        return Ok(Expression::Value(parse_literal(parser)?));
    }

    if kind == TokenKind::OpenParen {
        parser.advance();
        let e = parse_expression(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(e);
    }

    // A type keyword applied to a parenthesized expression is the explicit
    // conversion operator, e.g. float(x).
    if kind.is_type_keyword() {
        let op = Operator::new(parser.advance().value.clone());
        parser.expect(TokenKind::OpenParen)?;
        let term = parse_expression(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(Expression::Unary {
            op,
            term: Box::new(term),
        });
    }

    let token = parser.current_token();
    Err(Error::new(
        ErrorImpl::PrimaryExpected {
            found: token.value.clone(),
        },
        token.span.start.clone(),
    ))
}

/// Literal --> IntLiteral | FloatLiteral | CharLiteral | true | false
///
/// Consumes exactly one token and produces a Value of the matching type.
fn parse_literal(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::IntLiteral => match token.value.parse::<i32>() {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            )),
        },
        TokenKind::FloatLiteral => match token.value.parse::<f32>() {
            Ok(x) => Ok(Value::Float(x)),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            )),
        },
        // The lexer guarantees exactly one character between the quotes.
        TokenKind::CharLiteral => Ok(Value::Char(token.value.chars().next().unwrap())),
        TokenKind::True => Ok(Value::Bool(true)),
        TokenKind::False => Ok(Value::Bool(false)),
        _ => Err(Error::new(
            ErrorImpl::PrimaryExpected { found: token.value },
            token.span.start,
        )),
    }
}

fn is_equality_op(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Equals | TokenKind::NotEquals)
}

fn is_relational_op(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Less | TokenKind::LessEquals | TokenKind::Greater | TokenKind::GreaterEquals
    )
}

fn is_add_op(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Plus | TokenKind::Minus)
}

fn is_multiply_op(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Star | TokenKind::Slash)
}

fn is_unary_op(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Not | TokenKind::Minus)
}
