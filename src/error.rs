use std::error::Error as StdError;

/// Diagnostic category of a [`CompilationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of operands for the mnemonic.
    ArgumentCount,
    /// Operand of the wrong type, e.g. a label where a register is required.
    OperandKind,
    /// Register outside the allowed range or a forbidden register mode.
    OperandConstraint,
    /// Literal or resolved address does not fit its address domain.
    Range,
    /// Malformed numeric literal.
    NumberFormat,
    /// Label or variable that the symbol table does not know.
    UndefinedSymbol,
    /// Any other failure reported by the environment while resolving a symbol.
    Unexpected,
    /// Mnemonic missing from the table.
    UnknownMnemonic,
}

/// The one error every encoder reports.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {message}")]
pub struct CompilationError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    #[source]
    pub cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl CompilationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            cause: None,
        }
    }

    pub fn with_cause(
        kind: ErrorKind,
        message: impl Into<String>,
        line: usize,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            cause: Some(cause.into()),
        }
    }

    pub fn argument_count(mnemonic: &str, expected: usize, line: usize) -> Self {
        let msg = match expected {
            0 => format!("{} takes no operands", mnemonic.to_uppercase()),
            1 => format!("{} takes exactly 1 operand", mnemonic.to_uppercase()),
            n => format!("{} takes exactly {n} operands", mnemonic.to_uppercase()),
        };
        Self::new(ErrorKind::ArgumentCount, msg, line)
    }
}
