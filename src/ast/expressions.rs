use std::fmt::{self, Display, Formatter};

use super::types::Type;

/// Literal expression node.
///
/// Carries the concrete value together with its type tag; immutable once
/// constructed by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Bool(bool),
    Float(f32),
    Char(char),
}

impl Value {
    pub fn get_type(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Bool(_) => Type::Bool,
            Value::Float(_) => Type::Float,
            Value::Char(_) => Type::Char,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Float(x) => write!(f, "{}", x),
            Value::Char(c) => write!(f, "'{}'", c),
        }
    }
}

/// Variable reference, identified purely by name.
///
/// Doubles as the assignment target and as the key type of the TypeMap,
/// so equality and hashing go by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One lexical operator symbol, e.g. `+`, `&&`, unary `!`, or one of the
/// four type keywords used as explicit conversion operators.
///
/// The classification predicates drive both the expression ladder in the
/// parser and the typing rules in the checker.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub value: String,
}

impl Operator {
    pub fn new(value: impl Into<String>) -> Self {
        Operator {
            value: value.into(),
        }
    }

    pub fn is_arithmetic_op(&self) -> bool {
        matches!(self.value.as_str(), "+" | "-" | "*" | "/")
    }

    pub fn is_relational_op(&self) -> bool {
        matches!(self.value.as_str(), "<" | "<=" | ">" | ">=" | "==" | "!=")
    }

    pub fn is_boolean_op(&self) -> bool {
        matches!(self.value.as_str(), "&&" | "||")
    }

    pub fn is_not_op(&self) -> bool {
        self.value == "!"
    }

    pub fn is_negate_op(&self) -> bool {
        self.value == "-"
    }

    pub fn is_int_op(&self) -> bool {
        self.value == "int"
    }

    pub fn is_float_op(&self) -> bool {
        self.value == "float"
    }

    pub fn is_char_op(&self) -> bool {
        self.value == "char"
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Expression node.
///
/// Binary and Unary own their operands exclusively; the tree is immutable
/// once the parser has built it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Value(Value),
    Variable(Variable),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: Operator,
        term: Box<Expression>,
    },
}

impl Expression {
    pub(crate) fn write_indented(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Expression::Value(value) => writeln!(f, "{}Value: {}", pad, value),
            Expression::Variable(variable) => writeln!(f, "{}Variable: {}", pad, variable),
            Expression::Binary { op, left, right } => {
                writeln!(f, "{}Binary: {}", pad, op)?;
                left.write_indented(f, indent + 1)?;
                right.write_indented(f, indent + 1)
            }
            Expression::Unary { op, term } => {
                writeln!(f, "{}Unary: {}", pad, op)?;
                term.write_indented(f, indent + 1)
            }
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
