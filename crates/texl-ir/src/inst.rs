//! Instructions — linear SSA values produced in emission order.

use crate::types::TensorType;

/// A unique identifier for the value produced by one instruction.
///
/// Ids are allocated monotonically starting at 0 and are unique within one
/// [`Module`](crate::Module); they are never reused.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ValueId(pub u32);

/// A literal scalar constant.
#[derive(Clone, Copy, Debug)]
pub enum Literal {
    I64(i64),
    F64(f64),
}

impl Literal {
    /// Returns the dtype token of this literal.
    pub fn dtype(&self) -> &'static str {
        match self {
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
        }
    }
}

/// One IR instruction together with the value it produces.
#[derive(Clone, Debug)]
pub struct Instruction {
    /// The value this instruction produces.
    pub result: ValueId,
    /// Declared result type.
    pub ty: TensorType,
    /// What the instruction computes.
    pub kind: InstKind,
}

/// The operation performed by an [`Instruction`].
#[derive(Clone, Debug)]
pub enum InstKind {
    /// Declares an external value by name.
    Input { name: String },
    /// A literal scalar constant.
    Const { value: Literal },
    /// A named binary operation over two earlier values.
    ///
    /// `op` is an open token; the type environment decides which
    /// operand combinations are legal before the instruction is built.
    Binary {
        op: String,
        lhs: ValueId,
        rhs: ValueId,
    },
}
