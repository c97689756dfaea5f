use pretty_assertions::assert_eq;
use vn8_rs::{ErrorKind, MemoryEnv, MnemonicTable};

fn encode(mn: &str, target: &str) -> Vec<u8> {
    let table = MnemonicTable::build();
    let mut env = MemoryEnv::default();
    env.define_label("target", 0x2C7);
    table.encode(mn, &[target], &mut env).unwrap();
    env.bytes
}

#[test]
fn condition_codes() {
    let cases: &[(&str, u8)] = &[
        ("jnz", 0b0010_0000),
        ("jnc", 0b0010_0100),
        ("jns", 0b0010_1000),
        ("jno", 0b0011_1000),
        ("jz", 0b0011_0000),
        ("jc", 0b0011_1000),
        ("js", 0b0011_1000),
        ("jo", 0b0011_1100),
    ];
    for &(mn, code) in cases {
        assert_eq!(encode(mn, "0"), vec![code, 0x00], "{mn}");
    }
}

#[test]
fn jno_jc_js_share_an_encoding() {
    let jno = encode("jno", "target");
    assert_eq!(encode("jc", "target"), jno);
    assert_eq!(encode("js", "target"), jno);
}

#[test]
fn address_bits_merge_with_condition() {
    // 0x2C7: high address bits 8..9 = 0b10
    assert_eq!(encode("jz", "target"), vec![0b0011_0010, 0xC7]);
    assert_eq!(encode("jnz", "0x3FF"), vec![0b0010_0011, 0xFF]);
}

#[test]
fn branch_errors() {
    let table = MnemonicTable::build();
    let mut env = MemoryEnv::default();
    env.set_line(9);

    let err = table.encode("jz", &[], &mut env).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ArgumentCount);
    assert!(err.message.contains("JZ"));

    let err = table.encode("jc", &["a", "b"], &mut env).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ArgumentCount);

    let err = table.encode("jo", &["0x400"], &mut env).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Range);
    assert_eq!(err.to_string(), "line 9: address must not exceed 1023");

    let err = table.encode("jns", &["9x"], &mut env).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NumberFormat);

    assert!(env.bytes.is_empty());
}
