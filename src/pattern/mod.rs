// Fri Oct 16 2026 - Alex

pub mod error;
pub mod mask;
pub mod pattern;
pub mod wildcard;

pub use error::PatternError;
pub use mask::MaskedByte;
pub use pattern::Pattern;
pub use wildcard::{Nibble, Wildcard, WILDCARD_CHAR};

/// Parses a hex pattern such as `"DE??BEEF"`.
pub fn build_pattern(text: &str) -> Result<Pattern, PatternError> {
    Pattern::from_hex(text)
}
