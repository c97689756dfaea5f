use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, info};
use vn8_rs::literal::resolve_variable_address;
use vn8_rs::{AddressWidths, Environment, MemoryEnv, MnemonicTable};

use crate::error::AsmError;
use crate::source::{parse_program, Line, Stmt};

#[derive(Debug, Clone, Serialize)]
pub struct ListingLine {
    pub line: usize,
    pub addr: u32,
    pub bytes: Vec<u8>,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Assembly {
    pub bytes: Vec<u8>,
    pub listing: Vec<ListingLine>,
    pub labels: BTreeMap<String, u32>,
    pub variables: BTreeMap<String, u32>,
}

/// Pass-1 environment: counts bytes and treats every label as address 0.
struct SizingEnv<'a> {
    line: usize,
    widths: AddressWidths,
    variables: &'a HashMap<String, u32>,
    emitted: usize,
}

impl Environment for SizingEnv<'_> {
    fn current_line(&self) -> usize {
        self.line
    }
    fn variable_address(&self, name: &str) -> anyhow::Result<Option<u32>> {
        Ok(self.variables.get(name).copied())
    }
    fn label_address(&self, _name: &str) -> anyhow::Result<Option<u32>> {
        Ok(Some(0))
    }
    fn emit_byte(&mut self, _byte: u8) {
        self.emitted += 1;
    }
    fn address_widths(&self) -> AddressWidths {
        self.widths
    }
}

fn operands(ops: &[String]) -> Vec<&str> {
    ops.iter().map(String::as_str).collect()
}

/// Two-pass assembly of `text` into a flat image starting at address 0.
pub fn assemble(
    text: &str,
    table: &MnemonicTable,
    widths: AddressWidths,
) -> Result<Assembly, AsmError> {
    let lines = parse_program(text)?;
    let mut out = Assembly::default();

    // Pass 1: label addresses and variables
    let mut vars: HashMap<String, u32> = HashMap::new();
    let mut pc = 0usize;
    for l in &lines {
        if let Some(name) = &l.label {
            if out.labels.insert(name.clone(), pc as u32).is_some() {
                return Err(AsmError::DuplicateLabel { line: l.number, name: name.clone() });
            }
        }
        match &l.stmt {
            Some(Stmt::Var { name, value }) => {
                let addr = {
                    let env = SizingEnv { line: l.number, widths, variables: &vars, emitted: 0 };
                    resolve_variable_address(value, &env)?
                };
                vars.insert(name.clone(), addr);
            }
            Some(Stmt::Instr { mnemonic, operands: ops }) => {
                let mut env = SizingEnv { line: l.number, widths, variables: &vars, emitted: 0 };
                table.encode(mnemonic, &operands(ops), &mut env)?;
                pc += env.emitted;
            }
            None => {}
        }
    }

    let max = widths.max_far() as usize + 1;
    if pc > max {
        return Err(AsmError::TooLarge { size: pc, max });
    }
    debug!(size = pc, labels = out.labels.len(), "pass 1 done");

    // Pass 2: encode with real addresses
    let mut env = MemoryEnv::new(widths);
    env.labels = out.labels.iter().map(|(k, v)| (k.clone(), *v)).collect();
    env.variables = vars.clone();
    for l in &lines {
        encode_line(l, table, &mut env, &mut out.listing)?;
    }

    out.bytes = env.take_bytes();
    out.variables = vars.into_iter().collect();
    info!(bytes = out.bytes.len(), "assembled");
    Ok(out)
}

fn encode_line(
    l: &Line,
    table: &MnemonicTable,
    env: &mut MemoryEnv,
    listing: &mut Vec<ListingLine>,
) -> Result<(), AsmError> {
    let Some(Stmt::Instr { mnemonic, operands: ops }) = &l.stmt else {
        return Ok(());
    };
    env.set_line(l.number);
    let start = env.bytes.len();
    table.encode(mnemonic, &operands(ops), env)?;
    listing.push(ListingLine {
        line: l.number,
        addr: start as u32,
        bytes: env.bytes[start..].to_vec(),
        text: l.text.clone(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vn8_rs::ErrorKind;

    #[test]
    fn sizing_counts_int_as_one_byte() {
        let table = MnemonicTable::build();
        let src = "int 0\nafter: nop\n";
        let asm = assemble(src, &table, AddressWidths::default()).unwrap();
        assert_eq!(asm.labels["after"], 1);
        assert_eq!(asm.bytes.len(), 3);
    }

    #[test]
    fn variables_resolve_in_order() {
        let table = MnemonicTable::build();
        let src = "base = 0x20\nalias = base\n";
        let asm = assemble(src, &table, AddressWidths::default()).unwrap();
        assert_eq!(asm.variables["alias"], 0x20);

        let err = assemble("x = later\nlater = 1\n", &table, AddressWidths::default()).unwrap_err();
        assert!(matches!(err, AsmError::Compile(ref e) if e.kind == ErrorKind::UndefinedSymbol));
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn variable_range() {
        let table = MnemonicTable::build();
        let err = assemble("big = 256\n", &table, AddressWidths::default()).unwrap_err();
        assert!(matches!(err, AsmError::Compile(ref e) if e.kind == ErrorKind::Range));
    }
}
