// Fri Oct 16 2026 - Alex

use crate::patch::error::PatchError;
use crate::patch::occurrence::Occurrence;
use crate::pattern::Pattern;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    lookup: Pattern,
    replacement: Pattern,
    occurrence: Occurrence,
    counter: usize,
}

impl Patch {
    pub fn new(lookup: Pattern, replacement: Pattern, occurrence: Occurrence) -> Result<Self, PatchError> {
        if lookup.len() != replacement.len() {
            return Err(PatchError::LengthMismatch {
                lookup: lookup.len(),
                replacement: replacement.len(),
            });
        }

        Ok(Self {
            lookup,
            replacement,
            occurrence,
            counter: 0,
        })
    }

    pub fn from_hex(lookup: &str, replacement: &str, occurrence: Occurrence) -> Result<Self, PatchError> {
        Self::new(Pattern::from_hex(lookup)?, Pattern::from_hex(replacement)?, occurrence)
    }

    pub fn lookup(&self) -> &Pattern {
        &self.lookup
    }

    pub fn replacement(&self) -> &Pattern {
        &self.replacement
    }

    pub fn occurrence(&self) -> Occurrence {
        self.occurrence
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Number of times the lookup pattern matched so far.
    pub fn occurrences_seen(&self) -> usize {
        self.counter
    }

    /// A specific target that has been located. Such a patch no longer needs scanning.
    pub fn is_satisfied(&self) -> bool {
        match self.occurrence {
            Occurrence::All => false,
            Occurrence::Nth(n) => self.counter >= n.get(),
        }
    }

    /// Whether the match just recorded is one this patch wants replaced.
    pub fn wants_current(&self) -> bool {
        match self.occurrence {
            Occurrence::All => self.counter > 0,
            Occurrence::Nth(n) => self.counter == n.get(),
        }
    }

    pub fn is_found(&self) -> bool {
        match self.occurrence {
            Occurrence::All => self.counter > 0,
            Occurrence::Nth(n) => self.counter >= n.get(),
        }
    }

    pub(crate) fn record_match(&mut self) {
        self.counter += 1;
    }

    pub(crate) fn reset(&mut self) {
        self.counter = 0;
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.lookup, self.replacement, self.occurrence)
    }
}
