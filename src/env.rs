use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Bit widths of the two address domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressWidths {
    pub short_bits: u32, // variable addresses
    pub far_bits: u32,   // labels and jump targets
}

impl Default for AddressWidths {
    fn default() -> Self {
        Self {
            short_bits: 8,
            far_bits: 10,
        }
    }
}

impl AddressWidths {
    pub fn max_short(&self) -> u32 {
        bound(self.short_bits)
    }

    pub fn max_far(&self) -> u32 {
        bound(self.far_bits)
    }
}

fn bound(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// What an encoder needs from the assembler around it: symbol lookup,
/// the current source line, and the byte sink.
///
/// `Ok(None)` from a lookup means the name is not defined; `Err` is reserved
/// for failures of the environment itself.
pub trait Environment {
    fn current_line(&self) -> usize;
    fn variable_address(&self, name: &str) -> Result<Option<u32>>;
    fn label_address(&self, name: &str) -> Result<Option<u32>>;
    fn emit_byte(&mut self, byte: u8);

    fn address_widths(&self) -> AddressWidths {
        AddressWidths::default()
    }
}

/// In-memory environment: two symbol tables and a growing byte buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    pub line: usize,
    pub widths: AddressWidths,
    pub labels: HashMap<String, u32>,
    pub variables: HashMap<String, u32>,
    pub bytes: Vec<u8>,
}

impl MemoryEnv {
    pub fn new(widths: AddressWidths) -> Self {
        Self {
            widths,
            ..Self::default()
        }
    }

    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    pub fn define_label(&mut self, name: impl Into<String>, addr: u32) {
        self.labels.insert(name.into(), addr);
    }

    pub fn define_variable(&mut self, name: impl Into<String>, addr: u32) {
        self.variables.insert(name.into(), addr);
    }

    pub fn take_bytes(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl Environment for MemoryEnv {
    fn current_line(&self) -> usize {
        self.line
    }
    fn variable_address(&self, name: &str) -> Result<Option<u32>> {
        Ok(self.variables.get(name).copied())
    }
    fn label_address(&self, name: &str) -> Result<Option<u32>> {
        Ok(self.labels.get(name).copied())
    }
    fn emit_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }
    fn address_widths(&self) -> AddressWidths {
        self.widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let w = AddressWidths::default();
        assert_eq!(w.max_short(), 0xFF);
        assert_eq!(w.max_far(), 0x3FF);
        let wide = AddressWidths { short_bits: 32, far_bits: 16 };
        assert_eq!(wide.max_short(), u32::MAX);
        assert_eq!(wide.max_far(), 0xFFFF);
    }

    #[test]
    fn widths_from_partial_json() {
        let w: AddressWidths = serde_json::from_str(r#"{ "far_bits": 12 }"#).unwrap();
        assert_eq!(w, AddressWidths { short_bits: 8, far_bits: 12 });
    }
}
