// Fri Oct 16 2026 - Alex

use crate::pattern::error::PatternError;
use crate::pattern::mask::MaskedByte;
use crate::pattern::wildcard::Nibble;
use std::fmt;
use std::str::FromStr;

/// A non-empty sequence of nibble-maskable bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    bytes: Vec<MaskedByte>,
}

impl Pattern {
    pub fn new(bytes: Vec<MaskedByte>) -> Result<Self, PatternError> {
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { bytes })
    }

    /// Parses pairs of hex digits, `?` standing for a wildcard nibble.
    ///
    /// `"DE??BEEF"` gives four bytes with the second one fully wildcarded,
    /// `"A?"` keeps the high nibble and wildcards the low one. Case is ignored
    /// and separators are not accepted.
    pub fn from_hex(hex: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = hex.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(PatternError::InvalidFormat(chars.len()));
        }

        let nibble = |position: usize| {
            let character = chars[position];
            Nibble::parse(character).ok_or(PatternError::InvalidCharacter { character, position })
        };

        let mut bytes = Vec::with_capacity(chars.len() / 2);
        for i in (0..chars.len()).step_by(2) {
            let high = nibble(i)?;
            let low = nibble(i + 1)?;
            bytes.push(MaskedByte::from_nibbles(high, low));
        }

        Self::new(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PatternError> {
        Self::new(bytes.iter().copied().map(MaskedByte::exact).collect())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[MaskedByte] {
        &self.bytes
    }

    pub fn has_wildcards(&self) -> bool {
        self.bytes.iter().any(|b| !b.is_exact())
    }

    /// True when `data` starts with bytes matching this pattern.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }

        self.bytes.iter()
            .zip(data)
            .all(|(pattern_byte, &data_byte)| pattern_byte.matches(data_byte))
    }

    /// Overwrites the start of `data` in place. `data` must be at least as long as the pattern.
    pub fn apply(&self, data: &mut [u8]) {
        debug_assert!(data.len() >= self.bytes.len());
        for (target, pattern_byte) in data.iter_mut().zip(&self.bytes) {
            *target = pattern_byte.apply(*target);
        }
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes.iter().map(|b| b.to_string()).collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::wildcard::Wildcard;

    #[test]
    fn test_from_hex_exact() {
        let pattern = Pattern::from_hex("DEADBEEF").unwrap();
        assert_eq!(pattern.len(), 4);
        assert!(!pattern.has_wildcards());
        assert_eq!(pattern.bytes()[0], MaskedByte::exact(0xDE));
        assert_eq!(pattern.bytes()[3], MaskedByte::exact(0xEF));
    }

    #[test]
    fn test_from_hex_is_case_insensitive() {
        assert_eq!(Pattern::from_hex("deadbeef").unwrap(), Pattern::from_hex("DEADBEEF").unwrap());
        assert_eq!(Pattern::from_hex("dEaD").unwrap(), Pattern::from_bytes(&[0xDE, 0xAD]).unwrap());
    }

    #[test]
    fn test_from_hex_wildcards() {
        let pattern = Pattern::from_hex("DE???Fa?").unwrap();
        assert_eq!(pattern.bytes()[1], MaskedByte::any());
        assert_eq!(pattern.bytes()[2], MaskedByte::new(0x0F, Wildcard::HIGH));
        assert_eq!(pattern.bytes()[3], MaskedByte::new(0xA0, Wildcard::LOW));
        assert!(pattern.has_wildcards());
        assert_eq!(pattern.to_hex_string(), "DE???FA?");
    }

    #[test]
    fn test_from_hex_odd_length() {
        assert_eq!(Pattern::from_hex("ABC"), Err(PatternError::InvalidFormat(3)));
    }

    #[test]
    fn test_from_hex_invalid_character() {
        assert_eq!(
            Pattern::from_hex("ABZD"),
            Err(PatternError::InvalidCharacter { character: 'Z', position: 2 })
        );
        assert_eq!(
            Pattern::from_hex("AB D"),
            Err(PatternError::InvalidCharacter { character: ' ', position: 2 })
        );
        assert!(matches!(
            Pattern::from_hex("0x12"),
            Err(PatternError::InvalidCharacter { character: 'x', position: 1 })
        ));
    }

    #[test]
    fn test_from_hex_empty() {
        assert_eq!(Pattern::from_hex(""), Err(PatternError::Empty));
        assert_eq!(Pattern::new(Vec::new()), Err(PatternError::Empty));
    }

    #[test]
    fn test_matches_with_wildcards() {
        let pattern: Pattern = "DE??BEEF".parse().unwrap();
        assert!(pattern.matches(&[0xDE, 0xAD, 0xBE, 0xEF]));
        assert!(pattern.matches(&[0xDE, 0x00, 0xBE, 0xEF, 0x42]));
        assert!(!pattern.matches(&[0xDE, 0xAD, 0xBE]));
        assert!(!pattern.matches(&[0xDF, 0xAD, 0xBE, 0xEF]));
    }

    #[test]
    fn test_apply_in_place() {
        let replacement: Pattern = "CA??BEEF".parse().unwrap();
        let mut data = [0xDE, 0xAD, 0xBE, 0xEF, 0x11];
        replacement.apply(&mut data);
        assert_eq!(data, [0xCA, 0xAD, 0xBE, 0xEF, 0x11]);
    }

    #[test]
    fn test_apply_nibble_wildcards() {
        let replacement: Pattern = "?1B?".parse().unwrap();
        let mut data = [0xAA, 0xCC];
        replacement.apply(&mut data);
        assert_eq!(data, [0xA1, 0xBC]);
    }
}
