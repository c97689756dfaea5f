use std::collections::HashMap;

use tracing::debug;

use crate::env::Environment;
use crate::error::{CompilationError, ErrorKind};
use crate::instructions::InstrDesc;
use crate::isa::{branch, control, cycle, no_operand};

/// Lowercase mnemonic -> encoder, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MnemonicTable {
    map: HashMap<&'static str, InstrDesc>,
}

impl MnemonicTable {
    /// Merges the four family tables.
    pub fn build() -> Self {
        Self::from_families(&[
            no_operand::TABLE,
            cycle::TABLE,
            branch::TABLE,
            control::TABLE,
        ])
    }

    /// # Panics
    /// If two tables register the same mnemonic.
    pub fn from_families(families: &[&[InstrDesc]]) -> Self {
        let mut map = HashMap::new();
        for desc in families.iter().copied().flatten() {
            if map.insert(desc.mnemonic, *desc).is_some() {
                panic!("mnemonic `{}` registered twice", desc.mnemonic);
            }
        }
        debug!(count = map.len(), "mnemonic table built");
        Self { map }
    }

    pub fn lookup(&self, mnemonic: &str) -> Option<&InstrDesc> {
        match self.map.get(mnemonic) {
            Some(d) => Some(d),
            None => self.map.get(mnemonic.to_ascii_lowercase().as_str()),
        }
    }

    /// Looks up `mnemonic` and encodes `args` into `env`.
    pub fn encode(
        &self,
        mnemonic: &str,
        args: &[&str],
        env: &mut dyn Environment,
    ) -> Result<(), CompilationError> {
        let desc = self.lookup(mnemonic).ok_or_else(|| {
            CompilationError::new(
                ErrorKind::UnknownMnemonic,
                format!("unknown mnemonic `{mnemonic}`"),
                env.current_line(),
            )
        })?;
        desc.encode(args, env)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Mnemonics in alphabetical order.
    pub fn mnemonics(&self) -> Vec<&'static str> {
        let mut v: Vec<_> = self.map.keys().copied().collect();
        v.sort_unstable();
        v
    }
}

impl Default for MnemonicTable {
    fn default() -> Self {
        Self::build()
    }
}
