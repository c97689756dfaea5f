pub mod bits;
pub mod env;
pub mod error;
pub mod instructions;
pub mod literal;
pub mod register;
pub mod registry;

pub mod isa; // per-family encoders

pub use env::{AddressWidths, Environment, MemoryEnv};
pub use error::{CompilationError, ErrorKind};
pub use registry::MnemonicTable;
