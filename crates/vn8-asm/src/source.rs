use vn8_rs::literal::validate_identifier;

use crate::error::AsmError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `mnemonic op1, op2`
    Instr { mnemonic: String, operands: Vec<String> },
    /// `name = value`, value being an address or an earlier variable
    Var { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize, // 1-based
    pub label: Option<String>,
    pub stmt: Option<Stmt>,
    pub text: String,
}

/// Splits one source line into label, statement and operands.
///
/// `;` starts a comment. Operands are separated by commas and/or whitespace.
pub fn parse_line(number: usize, raw: &str) -> Result<Line, AsmError> {
    let code = match raw.find(';') {
        Some(p) => &raw[..p],
        None => raw,
    };
    let mut rest = code.trim();
    let text = rest.to_string();

    let mut label = None;
    if let Some((head, tail)) = rest.split_once(':') {
        let name = head.trim();
        if !validate_identifier(name) {
            return Err(AsmError::BadLabel { line: number, name: name.to_string() });
        }
        label = Some(name.to_string());
        rest = tail.trim();
    }

    let stmt = if rest.is_empty() {
        None
    } else if let Some((name, value)) = rest.split_once('=') {
        let name = name.trim();
        if !validate_identifier(name) {
            return Err(AsmError::BadVariable { line: number, name: name.to_string() });
        }
        Some(Stmt::Var { name: name.to_string(), value: value.trim().to_string() })
    } else {
        let mut words = rest
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty());
        // rest is non-empty and trimmed, so there is a first word
        let mnemonic = words.next().unwrap_or_default().to_ascii_lowercase();
        let operands = words.map(str::to_string).collect();
        Some(Stmt::Instr { mnemonic, operands })
    };

    Ok(Line { number, label, stmt, text })
}

pub fn parse_program(text: &str) -> Result<Vec<Line>, AsmError> {
    text.lines()
        .enumerate()
        .map(|(i, l)| parse_line(i + 1, l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_instr_and_comment() {
        let l = parse_line(3, "  loop: DJRNZ R1, loop ; count down").unwrap();
        assert_eq!(l.number, 3);
        assert_eq!(l.label.as_deref(), Some("loop"));
        assert_eq!(
            l.stmt,
            Some(Stmt::Instr {
                mnemonic: "djrnz".into(),
                operands: vec!["R1".into(), "loop".into()],
            })
        );
        assert_eq!(l.text, "loop: DJRNZ R1, loop");
    }

    #[test]
    fn blank_comment_and_bare_label() {
        assert_eq!(parse_line(1, "   ").unwrap().stmt, None);
        assert_eq!(parse_line(1, "; only a comment").unwrap().stmt, None);
        let l = parse_line(1, "end:").unwrap();
        assert_eq!(l.label.as_deref(), Some("end"));
        assert_eq!(l.stmt, None);
    }

    #[test]
    fn variables() {
        let l = parse_line(2, "counter = 0x10").unwrap();
        assert_eq!(
            l.stmt,
            Some(Stmt::Var { name: "counter".into(), value: "0x10".into() })
        );
        assert!(matches!(
            parse_line(2, "1x = 4"),
            Err(AsmError::BadVariable { line: 2, .. })
        ));
    }

    #[test]
    fn bad_label() {
        assert!(matches!(
            parse_line(5, "9lives: nop"),
            Err(AsmError::BadLabel { line: 5, .. })
        ));
    }
}
