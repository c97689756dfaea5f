//! Instruction encoders, one module per family.

pub mod branch;
pub mod control;
pub mod cycle;
pub mod no_operand;

use tracing::debug;

use crate::bits::InstrWord;
use crate::env::Environment;
use crate::error::CompilationError;

pub(crate) fn expect_args(
    mnemonic: &str,
    args: &[&str],
    n: usize,
    env: &dyn Environment,
) -> Result<(), CompilationError> {
    if args.len() != n {
        return Err(CompilationError::argument_count(mnemonic, n, env.current_line()));
    }
    Ok(())
}

/// High byte first, then (optionally) low byte.
pub(crate) fn emit_word(
    mnemonic: &str,
    word: &InstrWord,
    emit_low: bool,
    env: &mut dyn Environment,
) {
    let (hi, lo) = (word.high_byte(), word.low_byte());
    env.emit_byte(hi);
    if emit_low {
        env.emit_byte(lo);
        debug!(mnemonic, "emitted {hi:#04x} {lo:#04x}");
    } else {
        debug!(mnemonic, "emitted {hi:#04x}");
    }
}
