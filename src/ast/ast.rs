use std::fmt::{self, Display, Formatter};

use super::{expressions::Variable, statements::Block, types::Type};

/// One variable's declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub variable: Variable,
    pub ty: Type,
}

impl Declaration {
    pub fn new(variable: Variable, ty: Type) -> Self {
        Declaration { variable, ty }
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.variable)
    }
}

/// Ordered declaration list; insertion order is source order. Duplicate
/// names are a checking concern, not prevented structurally.
pub type Declarations = Vec<Declaration>;

/// Root of the AST: the declaration list and the main block.
///
/// Built once by a successful parse, immutable afterwards, consumed
/// read-only by the type checker and any downstream printer/interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Declarations,
    pub body: Block,
}

impl Program {
    pub fn new(declarations: Declarations, body: Block) -> Self {
        Program { declarations, body }
    }

    /// Prints the indented abstract syntax dump to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program (abstract syntax):")?;
        writeln!(f, "  Declarations:")?;
        for declaration in self.declarations.iter() {
            writeln!(f, "    {}", declaration)?;
        }
        self.body.write_indented(f, 1)
    }
}
