use crate::bits::{HighFlags, InstrWord};
use crate::env::Environment;
use crate::error::CompilationError;
use crate::instructions::{Encoding, InstrDesc};
use crate::literal::resolve_far_address;

pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        mnemonic: "jmp",
        encoding: Encoding::Control {
            tag: HighFlags::CONTROL,
            emit_low: true,
        },
    },
    InstrDesc {
        mnemonic: "call",
        encoding: Encoding::Control {
            tag: HighFlags::CONTROL.union(HighFlags::B2),
            emit_low: true,
        },
    },
    // Single-byte vector form: only the high byte reaches the output.
    InstrDesc {
        mnemonic: "int",
        encoding: Encoding::Control {
            tag: HighFlags::CONTROL.union(HighFlags::B3),
            emit_low: false,
        },
    },
];

pub fn encode(
    mnemonic: &str,
    tag: HighFlags,
    emit_low: bool,
    args: &[&str],
    env: &mut dyn Environment,
) -> Result<(), CompilationError> {
    super::expect_args(mnemonic, args, 1, env)?;
    let addr = resolve_far_address(args[0], env)?;
    let mut word = InstrWord::with_address(addr, env.address_widths().far_bits);
    word.set_high(tag);
    super::emit_word(mnemonic, &word, emit_low, env);
    Ok(())
}
