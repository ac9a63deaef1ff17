use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Declarations, Program},
        expressions::{Expression, Operator, Variable},
        statements::{Block, Statement},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Compile-time map from variable identity to declared type.
///
/// A derived, throwaway index built once per check run; never part of the
/// AST and never mutated after construction.
pub type TypeMap = HashMap<Variable, Type>;

/// Builds the TypeMap from a declaration list in one pass.
///
/// Deliberately a dumb last-write-wins index: duplicate names are rejected
/// by `check_declarations` before the map is ever consulted in a valid run.
pub fn typing(declarations: &Declarations) -> TypeMap {
    let mut map = TypeMap::new();
    for declaration in declarations {
        map.insert(declaration.variable.clone(), declaration.ty);
    }
    map
}

/// Validates the whole program: declarations first, then the body against
/// the type map built from them.
pub fn check_program(program: &Program) -> Result<(), Error> {
    check_declarations(&program.declarations)?;
    let type_map = typing(&program.declarations);
    check_block(&program.body, &type_map)
}

/// Rejects duplicate declarations.
///
/// Scans every pair of positions in order (i ascending, then j ascending)
/// so the first duplicate reported is deterministic.
pub fn check_declarations(declarations: &Declarations) -> Result<(), Error> {
    for i in 0..declarations.len() {
        for j in (i + 1)..declarations.len() {
            if declarations[i].variable == declarations[j].variable {
                return Err(Error::new(
                    ErrorImpl::DuplicateDeclaration {
                        variable: declarations[j].variable.name.clone(),
                    },
                    Position::null(),
                ));
            }
        }
    }
    Ok(())
}

/// Computes the static type of an expression.
///
/// Pure: same expression and map always yield the same type. Assumes the
/// operands have already been validated; only variable lookups can fail.
pub fn type_of(expression: &Expression, type_map: &TypeMap) -> Result<Type, Error> {
    match expression {
        Expression::Value(value) => Ok(value.get_type()),
        Expression::Variable(variable) => {
            type_map
                .get(variable)
                .copied()
                .ok_or_else(|| undeclared(variable))
        }
        Expression::Binary { op, left, .. } => {
            if op.is_arithmetic_op() {
                // Arithmetic typing is driven by the LEFT operand alone:
                // float + int is float, but int + float is int.
                if type_of(left, type_map)? == Type::Float {
                    Ok(Type::Float)
                } else {
                    Ok(Type::Int)
                }
            } else if op.is_relational_op() || op.is_boolean_op() {
                Ok(Type::Bool)
            } else {
                unreachable!("binary operator {} matches no category", op)
            }
        }
        Expression::Unary { op, term } => {
            if op.is_not_op() {
                Ok(Type::Bool)
            } else if op.is_negate_op() {
                type_of(term, type_map)
            } else if op.is_int_op() {
                Ok(Type::Int)
            } else if op.is_float_op() {
                Ok(Type::Float)
            } else if op.is_char_op() {
                Ok(Type::Char)
            } else {
                unreachable!("unary operator {} matches no category", op)
            }
        }
    }
}

/// Validates the legality of an expression, operands first.
pub fn check_expression(expression: &Expression, type_map: &TypeMap) -> Result<(), Error> {
    match expression {
        Expression::Value(_) => Ok(()),
        Expression::Variable(variable) => {
            if type_map.contains_key(variable) {
                Ok(())
            } else {
                Err(undeclared(variable))
            }
        }
        Expression::Binary { op, left, right } => {
            check_expression(left, type_map)?;
            check_expression(right, type_map)?;
            let left_type = type_of(left, type_map)?;
            let right_type = type_of(right, type_map)?;

            if op.is_arithmetic_op() {
                if left_type != Type::Int && left_type != Type::Float {
                    return Err(operand_error(op, left_type));
                }
                Ok(())
            } else if op.is_relational_op() {
                if left_type != right_type {
                    return Err(operand_error(op, right_type));
                }
                Ok(())
            } else if op.is_boolean_op() {
                if left_type != Type::Bool {
                    return Err(operand_error(op, left_type));
                }
                if right_type != Type::Bool {
                    return Err(operand_error(op, right_type));
                }
                Ok(())
            } else {
                unreachable!("binary operator {} matches no category", op)
            }
        }
        Expression::Unary { op, term } => {
            check_expression(term, type_map)?;
            let term_type = type_of(term, type_map)?;

            if op.is_not_op() {
                if term_type != Type::Bool {
                    return Err(operand_error(op, term_type));
                }
                Ok(())
            } else if op.is_negate_op() {
                if term_type != Type::Int && term_type != Type::Float {
                    return Err(operand_error(op, term_type));
                }
                Ok(())
            } else if op.is_int_op() {
                // Conversions are only legal when they actually convert;
                // int(int-expr) is rejected.
                if term_type != Type::Float && term_type != Type::Char {
                    return Err(conversion_error(op, term_type));
                }
                Ok(())
            } else if op.is_float_op() {
                if term_type != Type::Int {
                    return Err(conversion_error(op, term_type));
                }
                Ok(())
            } else if op.is_char_op() {
                if term_type != Type::Int {
                    return Err(conversion_error(op, term_type));
                }
                Ok(())
            } else {
                unreachable!("unary operator {} matches no category", op)
            }
        }
    }
}

/// Validates every member of a block in sequence order; the first failing
/// member aborts the whole block.
pub fn check_block(block: &Block, type_map: &TypeMap) -> Result<(), Error> {
    for statement in block.iter() {
        check_statement(statement, type_map)?;
    }
    Ok(())
}

/// Validates a statement against the type map.
pub fn check_statement(statement: &Statement, type_map: &TypeMap) -> Result<(), Error> {
    match statement {
        Statement::Skip => Ok(()),
        Statement::Assignment { target, source } => {
            let target_type = *type_map.get(target).ok_or_else(|| undeclared(target))?;
            check_expression(source, type_map)?;
            let source_type = type_of(source, type_map)?;

            if target_type != source_type {
                // The only tolerated mixed-mode assignments are the two
                // int widenings: int into bool and int into float.
                let tolerated = source_type == Type::Int
                    && (target_type == Type::Bool || target_type == Type::Float);
                if !tolerated {
                    return Err(Error::new(
                        ErrorImpl::MixedModeAssignment {
                            target: target.name.clone(),
                            target_type: target_type.to_string(),
                            source_type: source_type.to_string(),
                        },
                        Position::null(),
                    ));
                }
            }
            Ok(())
        }
        Statement::Block(block) => check_block(block, type_map),
        Statement::Conditional {
            test,
            then_branch,
            else_branch,
        } => {
            check_expression(test, type_map)?;
            if type_of(test, type_map)? != Type::Bool {
                return Err(non_bool_test("conditional"));
            }
            // Both branches are checked even though only one executes.
            check_statement(then_branch, type_map)?;
            check_statement(else_branch, type_map)
        }
        Statement::Loop { test, body } => {
            check_expression(test, type_map)?;
            if type_of(test, type_map)? != Type::Bool {
                return Err(non_bool_test("while loop"));
            }
            check_statement(body, type_map)
        }
    }
}

fn undeclared(variable: &Variable) -> Error {
    Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: variable.name.clone(),
        },
        Position::null(),
    )
}

fn operand_error(op: &Operator, operand: Type) -> Error {
    Error::new(
        ErrorImpl::OperandTypeError {
            operator: op.value.clone(),
            operand: operand.to_string(),
        },
        Position::null(),
    )
}

fn conversion_error(op: &Operator, operand: Type) -> Error {
    Error::new(
        ErrorImpl::InvalidConversion {
            operator: op.value.clone(),
            operand: operand.to_string(),
        },
        Position::null(),
    )
}

fn non_bool_test(construct: &str) -> Error {
    Error::new(
        ErrorImpl::NonBoolTest {
            construct: String::from(construct),
        },
        Position::null(),
    )
}
