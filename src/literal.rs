//! Numeric literals, address resolution and identifier checks.

use std::num::{IntErrorKind, ParseIntError};

use num_traits::Num;
use tracing::trace;

use crate::env::Environment;
use crate::error::{CompilationError, ErrorKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("malformed number literal `{0}`")]
    Format(String),
    #[error("number literal `{0}` is too large")]
    Overflow(String),
}

/// Parses `0x..` (hex), `0b..` (binary) or plain decimal text.
pub fn parse_integer(text: &str) -> Result<u32, LiteralError> {
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b") {
        (bin, 2)
    } else {
        (text, 10)
    };
    // from_str_radix tolerates a leading sign, literals here never carry one
    if digits.starts_with(['+', '-']) {
        return Err(LiteralError::Format(text.to_string()));
    }
    <u32 as Num>::from_str_radix(digits, radix).map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => LiteralError::Overflow(text.to_string()),
        _ => LiteralError::Format(text.to_string()),
    })
}

#[derive(Clone, Copy)]
enum Domain {
    Variable,
    Label,
}

/// Resolves a variable operand: a numeric address within the short domain or
/// a variable name.
pub fn resolve_variable_address(
    text: &str,
    env: &dyn Environment,
) -> Result<u32, CompilationError> {
    resolve(text, env, Domain::Variable)
}

/// Resolves a jump/call target: a numeric address within the far domain or a
/// label name.
pub fn resolve_far_address(text: &str, env: &dyn Environment) -> Result<u32, CompilationError> {
    resolve(text, env, Domain::Label)
}

fn resolve(text: &str, env: &dyn Environment, domain: Domain) -> Result<u32, CompilationError> {
    let line = env.current_line();
    let widths = env.address_widths();
    let max = match domain {
        Domain::Variable => widths.max_short(),
        Domain::Label => widths.max_far(),
    };
    let out_of_range =
        || CompilationError::new(ErrorKind::Range, format!("address must not exceed {max}"), line);

    let Some(first) = text.chars().next() else {
        return Err(CompilationError::new(ErrorKind::NumberFormat, "missing address", line));
    };

    if first.is_ascii_digit() {
        let addr = match parse_integer(text) {
            Ok(v) => v,
            Err(LiteralError::Overflow(_)) => return Err(out_of_range()),
            Err(e @ LiteralError::Format(_)) => {
                return Err(CompilationError::with_cause(
                    ErrorKind::NumberFormat,
                    format!("invalid address `{text}`"),
                    line,
                    e,
                ))
            }
        };
        if addr > max {
            return Err(out_of_range());
        }
        return Ok(addr);
    }

    let (found, what) = match domain {
        Domain::Variable => (env.variable_address(text), "variable"),
        Domain::Label => (env.label_address(text), "label"),
    };
    match found {
        Ok(Some(addr)) => {
            trace!(symbol = text, addr, "resolved {}", what);
            Ok(addr)
        }
        Ok(None) => Err(CompilationError::new(
            ErrorKind::UndefinedSymbol,
            format!("{what} `{text}` is not defined"),
            line,
        )),
        Err(cause) => Err(CompilationError::with_cause(
            ErrorKind::Unexpected,
            "unexpected error while resolving symbol",
            line,
            cause,
        )),
    }
}

/// True for names usable as labels and variables: `[A-Za-z0-9_-]+`, not
/// starting with a digit.
pub fn validate_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => false,
        Some(_) => word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        None => false,
    }
}
