// Fri Oct 16 2026 - Alex

use crate::patch::{Occurrence, PatchId, PatchSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOutcome {
    pub id: PatchId,
    pub occurrence: Occurrence,
    pub occurrences_seen: usize,
    pub found: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchReport {
    pub replaced: usize,
    pub not_found: usize,
    pub bytes_written: u64,
    pub outcomes: Vec<PatchOutcome>,
}

impl PatchReport {
    pub fn from_patches(patches: &PatchSet, replaced: usize, bytes_written: u64) -> Self {
        let outcomes: Vec<PatchOutcome> = patches
            .iter()
            .map(|(id, patch)| PatchOutcome {
                id,
                occurrence: patch.occurrence(),
                occurrences_seen: patch.occurrences_seen(),
                found: patch.is_found(),
            })
            .collect();

        Self {
            replaced,
            not_found: outcomes.iter().filter(|o| !o.found).count(),
            bytes_written,
            outcomes,
        }
    }

    pub fn all_found(&self) -> bool {
        self.not_found == 0
    }

    pub fn missing(&self) -> impl Iterator<Item = &PatchOutcome> {
        self.outcomes.iter().filter(|o| !o.found)
    }
}
