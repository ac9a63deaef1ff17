use std::fmt::Display;

/// The four scalar types of the language.
///
/// This is a closed set; there are no user-defined, array or structured
/// types. Values are compared by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    Float,
    Char,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::Float => write!(f, "float"),
            Type::Char => write!(f, "char"),
        }
    }
}
