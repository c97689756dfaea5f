use vn8_rs::instructions::Family;
use vn8_rs::{ErrorKind, MemoryEnv, MnemonicTable};

#[test]
fn table_holds_all_families() {
    let table = MnemonicTable::build();
    assert_eq!(table.len(), 32);
    let count = |f: Family| {
        table
            .mnemonics()
            .into_iter()
            .filter(|m| table.lookup(m).unwrap().family() == f)
            .count()
    };
    assert_eq!(count(Family::NoOperand), 20);
    assert_eq!(count(Family::Cycle), 1);
    assert_eq!(count(Family::Branch), 8);
    assert_eq!(count(Family::Control), 3);
}

#[test]
fn lookup_is_case_insensitive() {
    let table = MnemonicTable::build();
    assert_eq!(table.lookup("DJRNZ").unwrap().mnemonic, "djrnz");
    assert_eq!(table.lookup("MovAsr").unwrap().mnemonic, "movasr");
    assert!(table.lookup("mov").is_none());
}

#[test]
fn unknown_mnemonic() {
    let table = MnemonicTable::build();
    let mut env = MemoryEnv::default();
    env.set_line(2);
    let err = table.encode("xyz", &[], &mut env).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownMnemonic);
    assert_eq!(err.line, 2);
}

#[test]
fn table_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MnemonicTable>();
}

#[test]
fn disjoint_tables_merge() {
    use vn8_rs::isa::{control, cycle};
    let table = MnemonicTable::from_families(&[cycle::TABLE, control::TABLE]);
    assert_eq!(table.mnemonics(), vec!["call", "djrnz", "int", "jmp"]);
}

#[test]
#[should_panic(expected = "registered twice")]
fn duplicate_mnemonic_fails_at_build() {
    use vn8_rs::instructions::{Encoding, InstrDesc};
    const EXTRA: &[InstrDesc] = &[InstrDesc {
        mnemonic: "nop",
        encoding: Encoding::Implied { opcode: 0x1F },
    }];
    MnemonicTable::from_families(&[vn8_rs::isa::no_operand::TABLE, EXTRA]);
}
