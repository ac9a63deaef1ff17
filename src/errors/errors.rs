use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::PrimaryExpected { .. } => "PrimaryExpected",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::OperandTypeError { .. } => "OperandTypeError",
            ErrorImpl::NonBoolTest { .. } => "NonBoolTest",
            ErrorImpl::InvalidConversion { .. } => "InvalidConversion",
            ErrorImpl::MixedModeAssignment { .. } => "MixedModeAssignment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::SyntaxError { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, saw `{}`",
                expected, found
            )),
            ErrorImpl::PrimaryExpected { found } => ErrorTip::Suggestion(format!(
                "Expected Identifier | Literal | ( | Type, saw `{}`",
                found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::DuplicateDeclaration { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` declared more than once", variable))
            }
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::OperandTypeError { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to a `{}` operand",
                operator, operand
            )),
            ErrorImpl::NonBoolTest { construct } => ErrorTip::Suggestion(format!(
                "The test expression of a {} must be of type bool",
                construct
            )),
            ErrorImpl::InvalidConversion { operator, operand } => ErrorTip::Suggestion(format!(
                "Cannot convert a `{}` operand with `{}`",
                operand, operator
            )),
            ErrorImpl::MixedModeAssignment {
                target,
                target_type,
                source_type,
            } => ErrorTip::Suggestion(format!(
                "Cannot assign a `{}` expression to `{}` of type `{}`",
                source_type, target, target_type
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("syntax error: expecting {expected:?}, saw {found:?}")]
    SyntaxError { expected: String, found: String },
    #[error("expecting a primary expression, saw {found:?}")]
    PrimaryExpected { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("duplicate declaration: {variable:?}")]
    DuplicateDeclaration { variable: String },
    #[error("undeclared variable: {variable:?}")]
    UndeclaredVariable { variable: String },
    #[error("type error for {operator:?}: bad {operand:?} operand")]
    OperandTypeError { operator: String, operand: String },
    #[error("{construct:?} test is not of type bool")]
    NonBoolTest { construct: String },
    #[error("improper conversion with {operator:?}: {operand:?} operand")]
    InvalidConversion { operator: String, operand: String },
    #[error("mixed mode assignment to {target:?}: {source_type:?} into {target_type:?}")]
    MixedModeAssignment {
        target: String,
        target_type: String,
        source_type: String,
    },
}
