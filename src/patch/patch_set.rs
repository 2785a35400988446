// Fri Oct 16 2026 - Alex

use crate::patch::error::PatchError;
use crate::patch::occurrence::Occurrence;
use crate::patch::patch::Patch;
use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a patch, equal to its registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatchId(usize);

impl PatchId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "patch {}", self.0 + 1)
    }
}

/// Every registered patch, plus the ids still worth scanning for.
///
/// Patches are never dropped from storage so counters survive for the final
/// report. Retiring a patch only takes it out of `active`, which stays in
/// registration order so tie-breaks favor the earliest patch.
#[derive(Debug, Clone, Default)]
pub struct PatchSet {
    patches: Vec<Patch>,
    active: Vec<PatchId>,
}

impl PatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, patch: Patch) -> PatchId {
        let id = PatchId(self.patches.len());
        self.patches.push(patch);
        self.active.push(id);
        id
    }

    pub fn add_patch(
        &mut self,
        lookup: Pattern,
        replacement: Pattern,
        occurrence: Occurrence,
    ) -> Result<PatchId, PatchError> {
        Ok(self.add(Patch::new(lookup, replacement, occurrence)?))
    }

    pub fn get(&self, id: PatchId) -> Option<&Patch> {
        self.patches.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: PatchId) -> Option<&mut Patch> {
        self.patches.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatchId, &Patch)> {
        self.patches.iter().enumerate().map(|(i, patch)| (PatchId(i), patch))
    }

    pub fn active_ids(&self) -> &[PatchId] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    fn active_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().map(|id| self.patches[id.0].len())
    }

    pub fn longest_active(&self) -> usize {
        self.active_lengths().max().unwrap_or(0)
    }

    /// Bytes that must be held back between chunks so no match is split.
    pub fn overlap_capacity(&self) -> usize {
        self.longest_active().saturating_sub(1)
    }

    /// Drops patches whose specific occurrence has been located from the active list.
    pub fn retire_satisfied(&mut self) -> Vec<PatchId> {
        let patches = &self.patches;
        let mut retired = Vec::new();
        self.active.retain(|id| {
            let keep = !patches[id.0].is_satisfied();
            if !keep {
                retired.push(*id);
            }
            keep
        });
        retired
    }

    pub fn not_found_count(&self) -> usize {
        self.patches.iter().filter(|p| !p.is_found()).count()
    }

    /// Clears all counters and reactivates every patch.
    pub fn reset(&mut self) {
        for patch in &mut self.patches {
            patch.reset();
        }
        self.active = (0..self.patches.len()).map(PatchId).collect();
    }
}
