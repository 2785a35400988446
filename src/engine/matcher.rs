// Fri Oct 16 2026 - Alex

use crate::patch::{PatchId, PatchSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub position: usize,
    pub patch: PatchId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A patch wants the bytes at `position` replaced.
    Found(Match),
    /// Nothing more can be decided in this window. Positions from `resume`
    /// onward have not been evaluated yet.
    Exhausted { resume: usize },
}

/// Leftmost-first scanner over every active patch in a [`PatchSet`].
///
/// Each start position is evaluated once against all unsatisfied patches in
/// registration order. Every patch that matches there has its counter bumped,
/// and the first one that wants this particular occurrence is selected.
/// Positions strictly inside the selected span are then counted but never
/// selected, and the caller resumes after the span, so replaced bytes are
/// never a new start position.
pub struct MultiPatternMatcher {
    candidates: Vec<PatchId>,
}

impl MultiPatternMatcher {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Scans `window[cursor..]` for the next match to replace.
    ///
    /// Unless `final_window` is set, a position is only evaluated when the
    /// window holds [`lookahead`] bytes from it: enough for the longest
    /// candidate to match there and at every position inside its span. The
    /// rest is left for the caller to carry into the next window so no
    /// position is ever counted twice.
    pub fn find_next(
        &mut self,
        patches: &mut PatchSet,
        window: &[u8],
        cursor: usize,
        final_window: bool,
    ) -> ScanOutcome {
        self.candidates.clear();
        self.candidates.extend(
            patches.active_ids()
                .iter()
                .copied()
                .filter(|&id| patches.get(id).is_some_and(|p| !p.is_satisfied())),
        );

        if self.candidates.is_empty() {
            return ScanOutcome::Exhausted { resume: window.len() };
        }

        let lengths = self.candidates.iter().filter_map(|&id| patches.get(id).map(|p| p.len()));
        let (shortest, longest) = lengths.fold((usize::MAX, 0), |(lo, hi), len| (lo.min(len), hi.max(len)));
        let required = lookahead(longest);

        let mut position = cursor;
        while position < window.len() {
            let remaining = window.len() - position;
            if remaining < shortest || (!final_window && remaining < required) {
                break;
            }

            if let Some(id) = self.evaluate(patches, &window[position..]) {
                let span_end = patches.get(id).map_or(position + 1, |p| position + p.len());
                for inner in position + 1..span_end.min(window.len()) {
                    self.evaluate(patches, &window[inner..]);
                }
                return ScanOutcome::Found(Match { position, patch: id });
            }
            position += 1;
        }

        ScanOutcome::Exhausted { resume: position.min(window.len()) }
    }

    fn evaluate(&self, patches: &mut PatchSet, data: &[u8]) -> Option<PatchId> {
        let mut selected = None;

        for &id in &self.candidates {
            let Some(patch) = patches.get_mut(id) else {
                continue;
            };
            // Reached its target at an earlier position during this call.
            if patch.is_satisfied() {
                continue;
            }
            if patch.len() > data.len() || !patch.lookup().matches(data) {
                continue;
            }

            patch.record_match();
            if selected.is_none() && patch.wants_current() {
                selected = Some(id);
            }
        }

        selected
    }
}

/// Bytes needed from a start position before it can be evaluated outside the
/// final window: a full match plus every start position inside its span.
pub(crate) fn lookahead(longest: usize) -> usize {
    (longest * 2).saturating_sub(1)
}

impl Default for MultiPatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
