pub mod error;
pub mod program;
pub mod source;

// Re-export commonly used types/functions for the CLI
pub use error::AsmError;
pub use program::{assemble, Assembly, ListingLine};
pub use source::{parse_line, parse_program, Line, Stmt};
