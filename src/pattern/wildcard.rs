// Fri Oct 16 2026 - Alex

use bitflags::bitflags;

pub const WILDCARD_CHAR: char = '?';

bitflags! {
    /// Which halves of a pattern byte are wildcards.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Wildcard: u8 {
        const HIGH = 0b0000_0001;
        const LOW = 0b0000_0010;
        const BOTH = Self::HIGH.bits() | Self::LOW.bits();
    }
}

impl Wildcard {
    /// Bits of a byte that are significant under these flags.
    pub const fn mask(self) -> u8 {
        let mut mask = 0xFF;
        if self.contains(Self::HIGH) {
            mask &= 0x0F;
        }
        if self.contains(Self::LOW) {
            mask &= 0xF0;
        }
        mask
    }
}

/// A single parsed hex digit or wildcard marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nibble {
    Any,
    Value(u8),
}

impl Nibble {
    pub fn parse(c: char) -> Option<Self> {
        if c == WILDCARD_CHAR {
            return Some(Self::Any);
        }
        c.to_digit(16).map(|d| Self::Value(d as u8))
    }

    pub fn value(self) -> u8 {
        match self {
            Self::Any => 0,
            Self::Value(v) => v,
        }
    }

    pub fn is_any(self) -> bool {
        matches!(self, Self::Any)
    }
}
