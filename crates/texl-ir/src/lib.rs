//! TEXL intermediate representation.
//!
//! A linear, SSA-like IR for tensor expression programs: an append-only
//! sequence of instructions, each producing one uniquely numbered value,
//! with a single designated output tracking the most recent append.

mod display;
mod inst;
mod types;

pub use display::dump_module;
pub use inst::{InstKind, Instruction, Literal, ValueId};
pub use types::TensorType;

/// A TEXL IR module: the ordered instruction sequence plus the designated
/// output value.
///
/// Instruction order, value-id order, and emission order coincide: every
/// append allocates the next [`ValueId`] and makes it the module output.
/// Ids are never reused, even if the producing instruction is logically
/// dead.
#[derive(Clone, Debug, Default)]
pub struct Module {
    instructions: Vec<Instruction>,
    output: Option<ValueId>,
    next_value_id: u32,
}

impl Module {
    /// Creates an empty module.
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_value(&mut self) -> ValueId {
        let id = ValueId(self.next_value_id);
        self.next_value_id += 1;
        id
    }

    /// Declares an external input value and returns its id.
    pub fn declare_input(&mut self, name: impl Into<String>, result_type: TensorType) -> ValueId {
        let result = self.alloc_value();
        self.instructions.push(Instruction {
            result,
            ty: result_type,
            kind: InstKind::Input { name: name.into() },
        });
        self.output = Some(result);
        result
    }

    /// Appends a literal scalar constant and returns its id.
    pub fn append_const(&mut self, value: Literal, result_type: TensorType) -> ValueId {
        let result = self.alloc_value();
        self.instructions.push(Instruction {
            result,
            ty: result_type,
            kind: InstKind::Const { value },
        });
        self.output = Some(result);
        result
    }

    /// Appends a binary operation consuming two earlier values and returns
    /// the freshly allocated result id.
    ///
    /// # Panics
    ///
    /// Panics if `lhs` or `rhs` was not produced by an earlier instruction
    /// of this module. Supplying a foreign id is a caller contract breach,
    /// not a recoverable condition.
    pub fn append_binary_op(
        &mut self,
        op: impl Into<String>,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
    ) -> ValueId {
        let op = op.into();
        for operand in [lhs, rhs] {
            assert!(
                operand.0 < self.next_value_id,
                "append_binary_op({op}): operand %{} not produced by this module",
                operand.0,
            );
        }
        let result = self.alloc_value();
        self.instructions.push(Instruction {
            result,
            ty: result_type,
            kind: InstKind::Binary { op, lhs, rhs },
        });
        self.output = Some(result);
        result
    }

    /// Ordered instruction sequence (emission order).
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The designated output value, if any instruction has been appended.
    pub fn output(&self) -> Option<ValueId> {
        self.output
    }

    /// Number of instructions in the module.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if no instruction has been appended.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Renders the module as text: one line per instruction in emission
    /// order, then the output record.
    ///
    /// A pure read of current state; safe to call repeatedly and between
    /// appends. The structured accessors, not this string, are the
    /// interface downstream consumers should parse.
    pub fn compile(&self) -> String {
        dump_module(self)
    }
}
