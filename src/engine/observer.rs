// Fri Oct 16 2026 - Alex

use crate::patch::PatchId;

#[derive(Debug, Clone, Copy)]
pub struct ReplaceEvent<'a> {
    pub patch: PatchId,
    /// Absolute offset of the replaced region in the input.
    pub offset: u64,
    pub original: &'a [u8],
    pub patched: &'a [u8],
}

pub trait PatchObserver {
    fn on_replace(&mut self, event: &ReplaceEvent<'_>) {
        let _ = event;
    }

    fn on_progress(&mut self, bytes_written: u64) {
        let _ = bytes_written;
    }
}

pub struct NoopObserver;

impl PatchObserver for NoopObserver {}

/// Keeps every replacement, mostly useful in tests and for JSON output.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub replacements: Vec<RecordedReplacement>,
    pub bytes_written: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedReplacement {
    pub patch: PatchId,
    pub offset: u64,
    pub original: Vec<u8>,
    pub patched: Vec<u8>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offsets(&self) -> Vec<u64> {
        self.replacements.iter().map(|r| r.offset).collect()
    }
}

impl PatchObserver for RecordingObserver {
    fn on_replace(&mut self, event: &ReplaceEvent<'_>) {
        self.replacements.push(RecordedReplacement {
            patch: event.patch,
            offset: event.offset,
            original: event.original.to_vec(),
            patched: event.patched.to_vec(),
        });
    }

    fn on_progress(&mut self, bytes_written: u64) {
        self.bytes_written = bytes_written;
    }
}
