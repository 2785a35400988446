// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Hex string length must be even (got {0} characters)")]
    InvalidFormat(usize),
    #[error("Invalid character '{character}' in hex string at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Pattern must contain at least one byte")]
    Empty,
}
