// Fri Oct 16 2026 - Alex

use crate::patch::error::PatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Which match of a lookup pattern gets replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    #[default]
    All,
    Nth(NonZeroUsize),
}

impl Occurrence {
    /// Target `0` means every occurrence.
    pub fn from_target(target: usize) -> Self {
        match NonZeroUsize::new(target) {
            Some(n) => Self::Nth(n),
            None => Self::All,
        }
    }

    pub fn target(&self) -> usize {
        match self {
            Self::All => 0,
            Self::Nth(n) => n.get(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for Occurrence {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        s.parse::<NonZeroUsize>()
            .map(Self::Nth)
            .map_err(|_| PatchError::InvalidOccurrence(s.to_string()))
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Nth(n) => write!(f, "#{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!("all".parse::<Occurrence>().unwrap(), Occurrence::All);
        assert_eq!("ALL".parse::<Occurrence>().unwrap(), Occurrence::All);
    }

    #[test]
    fn test_parse_nth() {
        let occurrence: Occurrence = "3".parse().unwrap();
        assert_eq!(occurrence.target(), 3);
        assert!(!occurrence.is_all());
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage() {
        assert!(matches!("0".parse::<Occurrence>(), Err(PatchError::InvalidOccurrence(_))));
        assert!(matches!("-1".parse::<Occurrence>(), Err(PatchError::InvalidOccurrence(_))));
        assert!(matches!("first".parse::<Occurrence>(), Err(PatchError::InvalidOccurrence(_))));
        assert!(matches!("".parse::<Occurrence>(), Err(PatchError::InvalidOccurrence(_))));
    }

    #[test]
    fn test_target_round_trip() {
        assert_eq!(Occurrence::from_target(0), Occurrence::All);
        assert_eq!(Occurrence::from_target(0).target(), 0);
        assert_eq!(Occurrence::from_target(7).target(), 7);
    }
}
