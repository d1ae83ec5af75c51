//! Display implementations and text dump for debugging.

use std::fmt;

use crate::inst::{InstKind, Instruction, Literal, ValueId};
use crate::Module;

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I64(v) => write!(f, "{v}i"),
            Self::F64(v) => write!(f, "{v}f"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InstKind::Input { name } => {
                write!(f, "{} = Input \"{}\" : {}", self.result, name, self.ty)
            }
            InstKind::Const { value } => {
                write!(f, "{} = Const {} : {}", self.result, value, self.ty)
            }
            InstKind::Binary { op, lhs, rhs } => {
                write!(f, "{} = {} ({}, {}) : {}", self.result, op, lhs, rhs, self.ty)
            }
        }
    }
}

/// Produces the text rendering of a [`Module`]: one line per instruction
/// in emission order, then a trailing record naming the output value.
pub fn dump_module(module: &Module) -> String {
    let mut out = String::new();
    for inst in module.instructions() {
        out.push_str(&format!("{inst}\n"));
    }
    match module.output() {
        Some(id) => out.push_str(&format!("outputs: {id}\n")),
        None => out.push_str("outputs: none\n"),
    }
    out
}
