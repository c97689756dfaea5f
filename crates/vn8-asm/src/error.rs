use vn8_rs::CompilationError;

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("line {line}: invalid label name `{name}`")]
    BadLabel { line: usize, name: String },
    #[error("line {line}: invalid variable name `{name}`")]
    BadVariable { line: usize, name: String },
    #[error("line {line}: label `{name}` is already defined")]
    DuplicateLabel { line: usize, name: String },
    #[error("program needs {size} bytes, memory holds {max}")]
    TooLarge { size: usize, max: usize },
    #[error(transparent)]
    Compile(#[from] CompilationError),
}

impl AsmError {
    pub fn line(&self) -> Option<usize> {
        match self {
            AsmError::BadLabel { line, .. }
            | AsmError::BadVariable { line, .. }
            | AsmError::DuplicateLabel { line, .. } => Some(*line),
            AsmError::TooLarge { .. } => None,
            AsmError::Compile(e) => Some(e.line),
        }
    }
}
