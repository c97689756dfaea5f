use bitflags::bitflags;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// One 8-bit instruction field, bit 0 = least significant.
pub type Field = BitArray<[u8; 1], Lsb0>;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighFlags: u8 {
const B2 = 1 << 2; // condition / call / int
const B3 = 1 << 3;
const B4 = 1 << 4;
const BRANCH = 1 << 5; // conditional branch tag, djrnz R bit 0
const CONTROL = 1 << 6; // jmp/call/int tag, djrnz R bit 1
const CYCLE = 1 << 7; // djrnz tag
}
}

/// The (high, low) byte pair of an address-carrying instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstrWord {
    pub high: Field,
    pub low: Field,
}

impl InstrWord {
    pub fn with_address(value: u32, bit_count: u32) -> Self {
        let mut w = Self::default();
        pack_address(&mut w.high, &mut w.low, value, bit_count);
        w
    }

    pub fn set_high(&mut self, flags: HighFlags) {
        self.high.data[0] |= flags.bits();
    }

    pub fn high_byte(&self) -> u8 {
        self.high.load::<u8>()
    }

    pub fn low_byte(&self) -> u8 {
        self.low.load::<u8>()
    }
}

/// Spreads the low `bit_count` bits of `value` over `low` (bits 0..8) and
/// `high` (every bit from 8 up, at position `i % 8`, later bits overwriting
/// earlier ones). Positions beyond `bit_count` keep their contents.
pub fn pack_address(high: &mut Field, low: &mut Field, value: u32, bit_count: u32) {
    let n = bit_count.min(u32::BITS) as usize;
    let src = value.view_bits::<Lsb0>();
    for i in 0..n {
        if i < 8 {
            low.set(i, src[i]);
        } else {
            high.set(i % 8, src[i]);
        }
    }
}
