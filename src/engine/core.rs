// Fri Oct 16 2026 - Alex

use crate::config::PatcherConfig;
use crate::engine::error::EngineError;
use crate::engine::observer::{NoopObserver, PatchObserver};
use crate::engine::result::PatchReport;
use crate::engine::stream::StreamPatcher;
use crate::patch::{Occurrence, PatchError, PatchId, PatchSet};
use crate::pattern::{Pattern, PatternError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatcherState {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Registers patches, then streams an input file into a patched output file.
pub struct Patcher {
    config: PatcherConfig,
    patches: PatchSet,
    state: PatcherState,
}

impl Patcher {
    pub fn new(config: PatcherConfig) -> Self {
        Self {
            config,
            patches: PatchSet::new(),
            state: PatcherState::Idle,
        }
    }

    pub fn build_pattern(text: &str) -> Result<Pattern, PatternError> {
        Pattern::from_hex(text)
    }

    pub fn add_patch(
        &mut self,
        lookup: Pattern,
        replacement: Pattern,
        occurrence: Occurrence,
    ) -> Result<PatchId, PatchError> {
        let wildcard = lookup.has_wildcards() || replacement.has_wildcards();
        let id = self.patches.add_patch(lookup, replacement, occurrence)?;
        log::debug!(
            "Registered {}: {}{}",
            id,
            self.patches.get(id).map(|p| p.to_string()).unwrap_or_default(),
            if wildcard { " (wildcards)" } else { "" }
        );
        Ok(id)
    }

    pub fn add_hex_patch(&mut self, lookup: &str, replacement: &str, occurrence: Occurrence) -> Result<PatchId, PatchError> {
        self.add_patch(Pattern::from_hex(lookup)?, Pattern::from_hex(replacement)?, occurrence)
    }

    pub fn execute(&mut self, input: &Path, output: &Path) -> Result<PatchReport, EngineError> {
        self.execute_with_observer(input, output, &mut NoopObserver)
    }

    /// Counters start from zero on every call, so a patcher can be run again on another file.
    pub fn execute_with_observer(
        &mut self,
        input: &Path,
        output: &Path,
        observer: &mut dyn PatchObserver,
    ) -> Result<PatchReport, EngineError> {
        self.patches.reset();
        self.state = PatcherState::Running;

        let streamer = StreamPatcher::new().with_chunk_size(self.config.chunk_size);
        let result = streamer.execute(input, output, &mut self.patches, observer);

        self.state = match result {
            Ok(_) => PatcherState::Completed,
            Err(_) => PatcherState::Failed,
        };
        result
    }

    pub fn patches(&self) -> &PatchSet {
        &self.patches
    }

    pub fn config(&self) -> &PatcherConfig {
        &self.config
    }

    pub fn state(&self) -> PatcherState {
        self.state
    }
}

impl Default for Patcher {
    fn default() -> Self {
        Self::new(PatcherConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pattern() {
        assert_eq!(Patcher::build_pattern("DE??").unwrap().len(), 2);
        assert_eq!(Patcher::build_pattern("DE?"), Err(PatternError::InvalidFormat(3)));
    }

    #[test]
    fn test_add_patch_rejects_length_mismatch() {
        let mut patcher = Patcher::default();
        let err = patcher.add_hex_patch("DEADBEEF", "DEAD", Occurrence::All).unwrap_err();
        assert!(matches!(err, PatchError::LengthMismatch { lookup: 4, replacement: 2 }));
        assert!(patcher.patches().is_empty());
        assert_eq!(patcher.state(), PatcherState::Idle);
    }

    #[test]
    fn test_failed_run_sets_state() {
        let mut patcher = Patcher::default();
        patcher.add_hex_patch("AA", "BB", Occurrence::All).unwrap();
        let result = patcher.execute(Path::new("/nonexistent/in.bin"), Path::new("/nonexistent/out.bin"));
        assert!(result.is_err());
        assert_eq!(patcher.state(), PatcherState::Failed);
    }
}
