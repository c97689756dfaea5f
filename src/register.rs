#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    Direct,
    Indirect, // `@Rn`
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    None,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl Change {
    pub fn is_change(self) -> bool {
        self != Change::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOperand {
    pub number: u8, // 0..=15
    pub addressing: Addressing,
    pub change: Change,
}

impl RegisterOperand {
    pub fn is_direct(&self) -> bool {
        self.addressing == Addressing::Direct
    }
}

/// Parses register syntax `[+|-][@](R|r)<hex>[+|-]`.
///
/// Returns `None` for anything that is not a register, including a token with
/// both a leading and a trailing sign. Never panics.
pub fn parse_register(text: &str) -> Option<RegisterOperand> {
    let s = text.as_bytes();
    if s.len() < 2 || s.len() > 4 {
        return None;
    }

    let mut pos = 0usize;
    let mut change = match s.first()? {
        b'+' => Change::PreIncrement,
        b'-' => Change::PreDecrement,
        _ => Change::None,
    };
    if change.is_change() {
        pos += 1;
    }

    let mut addressing = Addressing::Direct;
    if *s.get(pos)? == b'@' {
        addressing = Addressing::Indirect;
        pos += 1;
    }

    if !matches!(s.get(pos)?, b'R' | b'r') {
        return None;
    }
    pos += 1;

    let number = (*s.get(pos)? as char).to_digit(16)? as u8;
    pos += 1;

    if let Some(&sign) = s.get(pos) {
        let post = match sign {
            b'+' => Change::PostIncrement,
            b'-' => Change::PostDecrement,
            _ => return None,
        };
        if change.is_change() {
            return None;
        }
        change = post;
        pos += 1;
    }

    (pos == s.len()).then_some(RegisterOperand {
        number,
        addressing,
        change,
    })
}
