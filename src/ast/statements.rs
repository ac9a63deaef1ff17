use std::{
    fmt::{self, Display, Formatter},
    slice::Iter,
};

use super::expressions::{Expression, Variable};

/// Ordered sequence of statements; insertion order is execution order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub members: Vec<Statement>,
}

impl Block {
    pub fn new() -> Self {
        Block { members: vec![] }
    }

    pub fn iter(&self) -> Iter<'_, Statement> {
        self.members.iter()
    }
}

impl Block {
    pub(crate) fn write_indented(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        writeln!(f, "{}Block:", pad)?;
        for member in self.iter() {
            member.write_indented(f, indent + 1)?;
        }
        Ok(())
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Statement node.
///
/// A Conditional without an `else` clause in source carries a Skip as its
/// else branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Skip,
    Assignment {
        target: Variable,
        source: Expression,
    },
    Block(Block),
    Conditional {
        test: Expression,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
    },
    Loop {
        test: Expression,
        body: Box<Statement>,
    },
}

impl Statement {
    pub(crate) fn write_indented(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Statement::Skip => writeln!(f, "{}Skip", pad),
            Statement::Assignment { target, source } => {
                writeln!(f, "{}Assignment: {}", pad, target)?;
                source.write_indented(f, indent + 1)
            }
            Statement::Block(block) => block.write_indented(f, indent),
            Statement::Conditional {
                test,
                then_branch,
                else_branch,
            } => {
                writeln!(f, "{}Conditional:", pad)?;
                test.write_indented(f, indent + 1)?;
                then_branch.write_indented(f, indent + 1)?;
                else_branch.write_indented(f, indent + 1)
            }
            Statement::Loop { test, body } => {
                writeln!(f, "{}Loop:", pad)?;
                test.write_indented(f, indent + 1)?;
                body.write_indented(f, indent + 1)
            }
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
