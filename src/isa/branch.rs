use crate::bits::{HighFlags, InstrWord};
use crate::env::Environment;
use crate::error::CompilationError;
use crate::instructions::{Encoding, InstrDesc};
use crate::literal::resolve_far_address;

const fn cond(mnemonic: &'static str, bits: HighFlags) -> InstrDesc {
    InstrDesc {
        mnemonic,
        encoding: Encoding::CondBranch {
            cond: bits.union(HighFlags::BRANCH),
        },
    }
}

// jno, jc and js share one code; kept as the CPU documents it.
pub const TABLE: &[InstrDesc] = &[
    cond("jnz", HighFlags::empty()),
    cond("jnc", HighFlags::B2),
    cond("jns", HighFlags::B3),
    cond("jno", HighFlags::B3.union(HighFlags::B4)),
    cond("jz", HighFlags::B4),
    cond("jc", HighFlags::B3.union(HighFlags::B4)),
    cond("js", HighFlags::B3.union(HighFlags::B4)),
    cond("jo", HighFlags::B2.union(HighFlags::B3).union(HighFlags::B4)),
];

pub fn encode(
    mnemonic: &str,
    cond: HighFlags,
    args: &[&str],
    env: &mut dyn Environment,
) -> Result<(), CompilationError> {
    super::expect_args(mnemonic, args, 1, env)?;
    let addr = resolve_far_address(args[0], env)?;
    let mut word = InstrWord::with_address(addr, env.address_widths().far_bits);
    word.set_high(cond);
    super::emit_word(mnemonic, &word, true, env);
    Ok(())
}
