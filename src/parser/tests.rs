//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Declarations (single and multi-identifier)
//! - Statements and nested blocks
//! - Expression precedence and associativity
//! - Conversion operator syntax
//! - Syntax error cases

use super::parser::parse;
use crate::{
    ast::{
        ast::Program,
        expressions::{Expression, Operator, Value, Variable},
        statements::Statement,
        types::Type,
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.clite".to_string())).unwrap();
    parse(tokens)
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("int main ( ) { }").unwrap();

    assert!(program.declarations.is_empty());
    assert!(program.body.members.is_empty());
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("int main ( ) { int x ; }").unwrap();

    assert_eq!(program.declarations.len(), 1);
    assert_eq!(program.declarations[0].variable, Variable::new("x"));
    assert_eq!(program.declarations[0].ty, Type::Int);
}

#[test]
fn test_parse_multi_identifier_declaration() {
    let program = parse_source("int main ( ) { float a , b , c ; }").unwrap();

    // Every identifier in the list gets the declared type, in source order.
    assert_eq!(program.declarations.len(), 3);
    for (declaration, name) in program.declarations.iter().zip(["a", "b", "c"]) {
        assert_eq!(declaration.variable, Variable::new(name));
        assert_eq!(declaration.ty, Type::Float);
    }
}

#[test]
fn test_parse_declarations_in_source_order() {
    let program = parse_source("int main ( ) { int x ; bool y ; char z ; }").unwrap();

    assert_eq!(program.declarations.len(), 3);
    assert_eq!(program.declarations[0].ty, Type::Int);
    assert_eq!(program.declarations[1].ty, Type::Bool);
    assert_eq!(program.declarations[2].ty, Type::Char);
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("int main ( ) { int x ; x = 3 ; }").unwrap();

    assert_eq!(program.body.members.len(), 1);
    assert_eq!(
        program.body.members[0],
        Statement::Assignment {
            target: Variable::new("x"),
            source: Expression::Value(Value::Int(3)),
        }
    );
}

#[test]
fn test_parse_skip_statement() {
    let program = parse_source("int main ( ) { ; ; }").unwrap();

    assert_eq!(
        program.body.members,
        vec![Statement::Skip, Statement::Skip]
    );
}

#[test]
fn test_parse_nested_block() {
    let program = parse_source("int main ( ) { { ; } }").unwrap();

    assert_eq!(program.body.members.len(), 1);
    assert!(matches!(program.body.members[0], Statement::Block(_)));
}

#[test]
fn test_parse_conditional_with_else() {
    let program =
        parse_source("int main ( ) { int x ; if ( true ) x = 1 ; else x = 2 ; }").unwrap();

    match &program.body.members[0] {
        Statement::Conditional {
            test,
            then_branch,
            else_branch,
        } => {
            assert_eq!(*test, Expression::Value(Value::Bool(true)));
            assert!(matches!(**then_branch, Statement::Assignment { .. }));
            assert!(matches!(**else_branch, Statement::Assignment { .. }));
        }
        other => panic!("Expected a conditional, got {:?}", other),
    }
}

#[test]
fn test_parse_conditional_without_else_defaults_to_skip() {
    let program = parse_source("int main ( ) { int x ; if ( true ) x = 1 ; }").unwrap();

    match &program.body.members[0] {
        Statement::Conditional { else_branch, .. } => {
            assert_eq!(**else_branch, Statement::Skip);
        }
        other => panic!("Expected a conditional, got {:?}", other),
    }
}

#[test]
fn test_parse_while_loop() {
    let program = parse_source("int main ( ) { bool b ; while ( b ) { } }").unwrap();

    match &program.body.members[0] {
        Statement::Loop { test, body } => {
            assert_eq!(*test, Expression::Variable(Variable::new("b")));
            assert!(matches!(**body, Statement::Block(_)));
        }
        other => panic!("Expected a loop, got {:?}", other),
    }
}

#[test]
fn test_parse_precedence_multiplication_binds_tighter() {
    let program = parse_source("int main ( ) { int x ; x = 1 + 2 * 3 ; }").unwrap();

    // 1 + (2 * 3)
    match &program.body.members[0] {
        Statement::Assignment { source, .. } => match source {
            Expression::Binary { op, left, right } => {
                assert_eq!(*op, Operator::new("+"));
                assert_eq!(**left, Expression::Value(Value::Int(1)));
                assert!(
                    matches!(&**right, Expression::Binary { op, .. } if *op == Operator::new("*"))
                );
            }
            other => panic!("Expected a binary expression, got {:?}", other),
        },
        other => panic!("Expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_addition_left_folds() {
    let program = parse_source("int main ( ) { int x ; x = 1 - 2 - 3 ; }").unwrap();

    // (1 - 2) - 3
    match &program.body.members[0] {
        Statement::Assignment { source, .. } => match source {
            Expression::Binary { op, left, right } => {
                assert_eq!(*op, Operator::new("-"));
                assert_eq!(**right, Expression::Value(Value::Int(3)));
                assert!(
                    matches!(&**left, Expression::Binary { op, .. } if *op == Operator::new("-"))
                );
            }
            other => panic!("Expected a binary expression, got {:?}", other),
        },
        other => panic!("Expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let program = parse_source("int main ( ) { int x ; x = ( 1 + 2 ) * 3 ; }").unwrap();

    match &program.body.members[0] {
        Statement::Assignment { source, .. } => match source {
            Expression::Binary { op, left, .. } => {
                assert_eq!(*op, Operator::new("*"));
                assert!(
                    matches!(&**left, Expression::Binary { op, .. } if *op == Operator::new("+"))
                );
            }
            other => panic!("Expected a binary expression, got {:?}", other),
        },
        other => panic!("Expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_unary_not() {
    let program = parse_source("int main ( ) { bool b ; b = ! b ; }").unwrap();

    match &program.body.members[0] {
        Statement::Assignment { source, .. } => {
            assert!(matches!(source, Expression::Unary { op, .. } if *op == Operator::new("!")));
        }
        other => panic!("Expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_conversion_operator() {
    let program = parse_source("int main ( ) { float f ; int x ; f = float ( x ) ; }").unwrap();

    match &program.body.members[0] {
        Statement::Assignment { source, .. } => match source {
            Expression::Unary { op, term } => {
                assert_eq!(*op, Operator::new("float"));
                assert_eq!(**term, Expression::Variable(Variable::new("x")));
            }
            other => panic!("Expected a unary expression, got {:?}", other),
        },
        other => panic!("Expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_literals() {
    let program = parse_source(
        "int main ( ) { int i ; float f ; char c ; bool b ; i = 42 ; f = 3.5 ; c = 'a' ; b = false ; }",
    )
    .unwrap();

    let sources: Vec<&Expression> = program
        .body
        .members
        .iter()
        .map(|s| match s {
            Statement::Assignment { source, .. } => source,
            other => panic!("Expected an assignment, got {:?}", other),
        })
        .collect();

    assert_eq!(*sources[0], Expression::Value(Value::Int(42)));
    assert_eq!(*sources[1], Expression::Value(Value::Float(3.5)));
    assert_eq!(*sources[2], Expression::Value(Value::Char('a')));
    assert_eq!(*sources[3], Expression::Value(Value::Bool(false)));
}

#[test]
fn test_parse_relation_does_not_chain() {
    // Relation admits at most one operator, so a < b < c is a syntax
    // error rather than (a < b) < c.
    let result = parse_source("int main ( ) { int a , b , c ; bool r ; r = a < b < c ; }");

    assert!(result.is_err());
}

#[test]
fn test_parse_equality_does_not_chain() {
    let result = parse_source("int main ( ) { int a , b , c ; bool r ; r = a == b == c ; }");

    assert!(result.is_err());
}

#[test]
fn test_parse_boolean_operators_chain() {
    let program = parse_source(
        "int main ( ) { bool a , b , c ; a = a && b && c ; a = a || b || c ; }",
    )
    .unwrap();

    assert_eq!(program.body.members.len(), 2);
}

#[test]
fn test_parse_missing_semicolon() {
    let result = parse_source("int main ( ) { int x ; x = 3 }");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "SyntaxError");
}

#[test]
fn test_parse_missing_header() {
    let result = parse_source("{ int x ; }");

    assert!(result.is_err());
}

#[test]
fn test_parse_bad_primary() {
    let result = parse_source("int main ( ) { int x ; x = ; ; }");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "PrimaryExpected");
}

#[test]
fn test_parse_trailing_input_rejected() {
    let result = parse_source("int main ( ) { } int");

    assert!(result.is_err());
}

#[test]
fn test_parse_type_agnostic() {
    // The parser accepts type-incorrect programs; rejecting them is the
    // checker's job.
    let result = parse_source("int main ( ) { int x ; x = true ; }");

    assert!(result.is_ok());
}
