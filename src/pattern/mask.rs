// Fri Oct 16 2026 - Alex

use crate::pattern::wildcard::{Nibble, Wildcard, WILDCARD_CHAR};
use std::fmt;

/// A pattern byte whose halves can each be a wildcard.
///
/// In a lookup pattern a wildcard half matches anything. In a replacement
/// pattern a wildcard half keeps the nibble that was already in the data.
/// The literal bits of a wildcard half are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskedByte {
    value: u8,
    wildcard: Wildcard,
}

impl MaskedByte {
    pub const fn exact(value: u8) -> Self {
        Self {
            value,
            wildcard: Wildcard::empty(),
        }
    }

    pub const fn any() -> Self {
        Self {
            value: 0,
            wildcard: Wildcard::BOTH,
        }
    }

    pub const fn new(value: u8, wildcard: Wildcard) -> Self {
        Self {
            value: value & wildcard.mask(),
            wildcard,
        }
    }

    pub fn from_nibbles(high: Nibble, low: Nibble) -> Self {
        let mut wildcard = Wildcard::empty();
        if high.is_any() {
            wildcard |= Wildcard::HIGH;
        }
        if low.is_any() {
            wildcard |= Wildcard::LOW;
        }
        Self::new((high.value() << 4) | low.value(), wildcard)
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    pub fn mask(&self) -> u8 {
        self.wildcard.mask()
    }

    pub fn is_exact(&self) -> bool {
        self.wildcard.is_empty()
    }

    #[inline]
    pub fn matches(&self, byte: u8) -> bool {
        let mask = self.mask();
        (byte & mask) == (self.value & mask)
    }

    /// Overwrites the significant nibbles of `byte`, passing wildcard halves through.
    #[inline]
    pub fn apply(&self, byte: u8) -> u8 {
        let mask = self.mask();
        (self.value & mask) | (byte & !mask)
    }
}

impl From<u8> for MaskedByte {
    fn from(value: u8) -> Self {
        Self::exact(value)
    }
}

impl fmt::Display for MaskedByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard.contains(Wildcard::HIGH) {
            write!(f, "{}", WILDCARD_CHAR)?;
        } else {
            write!(f, "{:X}", self.value >> 4)?;
        }
        if self.wildcard.contains(Wildcard::LOW) {
            write!(f, "{}", WILDCARD_CHAR)
        } else {
            write!(f, "{:X}", self.value & 0x0F)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let b = MaskedByte::exact(0xAD);
        assert!(b.matches(0xAD));
        assert!(!b.matches(0xAC));
        assert!(!b.matches(0xBD));
    }

    #[test]
    fn test_high_wildcard_match() {
        let b = MaskedByte::new(0x0D, Wildcard::HIGH);
        for high in 0..16u8 {
            assert!(b.matches((high << 4) | 0x0D));
        }
        assert!(!b.matches(0xAE));
    }

    #[test]
    fn test_low_wildcard_match() {
        let b = MaskedByte::new(0xA0, Wildcard::LOW);
        for low in 0..16u8 {
            assert!(b.matches(0xA0 | low));
        }
        assert!(!b.matches(0xB0));
    }

    #[test]
    fn test_full_wildcard_matches_everything() {
        let b = MaskedByte::any();
        assert!((0..=255u8).all(|v| b.matches(v)));
    }

    #[test]
    fn test_wildcard_bits_are_ignored() {
        let b = MaskedByte::new(0xFF, Wildcard::HIGH);
        assert_eq!(b.value(), 0x0F);
        assert_eq!(b, MaskedByte::new(0x3F, Wildcard::HIGH));
    }

    #[test]
    fn test_apply_preserves_wildcard_nibbles() {
        assert_eq!(MaskedByte::exact(0xCA).apply(0xDE), 0xCA);
        assert_eq!(MaskedByte::any().apply(0xAD), 0xAD);
        assert_eq!(MaskedByte::new(0x0C, Wildcard::HIGH).apply(0xAD), 0xAC);
        assert_eq!(MaskedByte::new(0xC0, Wildcard::LOW).apply(0xAD), 0xCD);
    }

    #[test]
    fn test_display() {
        assert_eq!(MaskedByte::exact(0x0A).to_string(), "0A");
        assert_eq!(MaskedByte::any().to_string(), "??");
        assert_eq!(MaskedByte::new(0x0B, Wildcard::HIGH).to_string(), "?B");
        assert_eq!(MaskedByte::new(0xC0, Wildcard::LOW).to_string(), "C?");
    }
}
