use tracing::debug;

use crate::env::Environment;
use crate::error::CompilationError;
use crate::instructions::{Encoding, InstrDesc};

const fn implied(mnemonic: &'static str, opcode: u8) -> InstrDesc {
    InstrDesc {
        mnemonic,
        encoding: Encoding::Implied { opcode },
    }
}

// Opcode byte: bits 0..=4 only.
pub const TABLE: &[InstrDesc] = &[
    implied("nop", 0b0_0001),
    implied("ret", 0b0_0010),
    implied("iret", 0b0_0011),
    implied("ei", 0b0_0100),
    implied("di", 0b0_0101),
    implied("rr", 0b0_0110),
    implied("rl", 0b0_0111),
    implied("rrc", 0b0_1000),
    implied("rlc", 0b0_1001),
    implied("hlt", 0b0_1010),
    implied("inca", 0b0_1011),
    implied("deca", 0b0_1100),
    implied("swapa", 0b0_1101),
    implied("daa", 0b0_1110),
    implied("dsa", 0b0_1111),
    implied("in", 0b1_0001),
    implied("out", 0b1_0010),
    implied("es", 0b1_0011),
    implied("movasr", 0b1_0100),
    implied("movsra", 0b1_0101),
];

pub fn encode(
    mnemonic: &str,
    opcode: u8,
    args: &[&str],
    env: &mut dyn Environment,
) -> Result<(), CompilationError> {
    super::expect_args(mnemonic, args, 0, env)?;
    // the zero byte precedes the opcode, unlike the address families
    env.emit_byte(0x00);
    env.emit_byte(opcode);
    debug!(mnemonic, "emitted 0x00 {opcode:#04x}");
    Ok(())
}
