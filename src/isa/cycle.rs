use crate::bits::{HighFlags, InstrWord};
use crate::env::Environment;
use crate::error::{CompilationError, ErrorKind};
use crate::instructions::{Encoding, InstrDesc};
use crate::literal::resolve_far_address;
use crate::register::parse_register;

pub const TABLE: &[InstrDesc] = &[InstrDesc {
    mnemonic: "djrnz",
    encoding: Encoding::CycleJump,
}];

/// `djrnz Rn, target`: decrement Rn (n <= 3) and jump while non-zero.
pub fn encode(
    mnemonic: &str,
    args: &[&str],
    env: &mut dyn Environment,
) -> Result<(), CompilationError> {
    super::expect_args(mnemonic, args, 2, env)?;
    let line = env.current_line();

    let reg = parse_register(args[0]).ok_or_else(|| {
        CompilationError::new(ErrorKind::OperandKind, "first operand must be a register", line)
    })?;
    if reg.change.is_change() {
        return Err(CompilationError::new(
            ErrorKind::OperandConstraint,
            "register increment/decrement is not allowed here",
            line,
        ));
    }
    if !reg.is_direct() {
        return Err(CompilationError::new(
            ErrorKind::OperandConstraint,
            "indirect addressing is not allowed here",
            line,
        ));
    }
    if reg.number > 3 {
        return Err(CompilationError::new(
            ErrorKind::OperandConstraint,
            "only registers R0-R3 are allowed here",
            line,
        ));
    }

    let addr = resolve_far_address(args[1], env)?;
    let mut word = InstrWord::with_address(addr, env.address_widths().far_bits);
    // register number goes over the address bits 5 and 6
    word.high.set(5, reg.number & 1 != 0);
    word.high.set(6, reg.number & 2 != 0);
    word.set_high(HighFlags::CYCLE);

    super::emit_word(mnemonic, &word, true, env);
    Ok(())
}
