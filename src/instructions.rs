use crate::bits::HighFlags;
use crate::env::Environment;
use crate::error::CompilationError;
use crate::isa::{branch, control, cycle, no_operand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    NoOperand,
    Cycle,
    Branch,
    Control,
}

/// How a mnemonic turns into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `0x00` followed by a fixed opcode byte.
    Implied { opcode: u8 },
    /// `djrnz R, target`.
    CycleJump,
    /// Far address plus condition bits in the high byte.
    CondBranch { cond: HighFlags },
    /// Far address plus tag bits; `int` drops the low byte.
    Control { tag: HighFlags, emit_low: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub encoding: Encoding,
}

impl InstrDesc {
    pub fn family(&self) -> Family {
        match self.encoding {
            Encoding::Implied { .. } => Family::NoOperand,
            Encoding::CycleJump => Family::Cycle,
            Encoding::CondBranch { .. } => Family::Branch,
            Encoding::Control { .. } => Family::Control,
        }
    }

    /// Validates `args` and emits the instruction. Nothing is emitted on error.
    pub fn encode(&self, args: &[&str], env: &mut dyn Environment) -> Result<(), CompilationError> {
        match self.encoding {
            Encoding::Implied { opcode } => no_operand::encode(self.mnemonic, opcode, args, env),
            Encoding::CycleJump => cycle::encode(self.mnemonic, args, env),
            Encoding::CondBranch { cond } => branch::encode(self.mnemonic, cond, args, env),
            Encoding::Control { tag, emit_low } => {
                control::encode(self.mnemonic, tag, emit_low, args, env)
            }
        }
    }
}
