// Fri Oct 16 2026 - Alex

use crate::engine::error::EngineError;
use crate::engine::matcher::{self, MultiPatternMatcher, ScanOutcome};
use crate::engine::observer::{PatchObserver, ReplaceEvent};
use crate::engine::result::PatchReport;
use crate::patch::PatchSet;
use crate::utils::hex::HexUtils;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Patches a byte stream chunk by chunk with a bounded buffer.
///
/// The buffer holds one read chunk plus a carried tail of at most
/// `2 * (longest active pattern - 1)` bytes. The tail is the part of the
/// previous chunk whose start positions could not be evaluated yet because
/// the longest pattern, or a match starting inside its span, did not fit; it
/// is copied to the front before the next read.
pub struct StreamPatcher {
    chunk_size: usize,
}

impl StreamPatcher {
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn execute(
        &self,
        input: &Path,
        output: &Path,
        patches: &mut PatchSet,
        observer: &mut dyn PatchObserver,
    ) -> Result<PatchReport, EngineError> {
        let input_file = File::open(input).map_err(|source| EngineError::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;
        let output_file = File::create(output).map_err(|source| EngineError::OpenOutput {
            path: output.to_path_buf(),
            source,
        })?;

        log::info!("Patching {} into {}", input.display(), output.display());
        self.run(input_file, BufWriter::new(output_file), patches, observer)
    }

    pub fn run<R: Read, W: Write>(
        &self,
        mut input: R,
        mut output: W,
        patches: &mut PatchSet,
        observer: &mut dyn PatchObserver,
    ) -> Result<PatchReport, EngineError> {
        let longest = patches.longest_active();
        let carry_capacity = matcher::lookahead(longest).saturating_sub(1);
        let read_size = self.chunk_size.max(longest);
        let mut buffer = vec![0u8; read_size + carry_capacity];
        let mut matcher = MultiPatternMatcher::new();

        let mut carried = 0usize;
        let mut offset = 0u64;
        let mut replaced = 0usize;

        log::info!(
            "Starting run with {} patches, {} byte chunks, {} byte carry",
            patches.active_count(),
            read_size,
            carry_capacity
        );

        loop {
            let read = read_chunk(&mut input, &mut buffer[carried..carried + read_size])?;
            let content_end = carried + read;
            let at_eof = read == 0;

            let mut cursor = 0;
            let resume = loop {
                let found = match matcher.find_next(patches, &buffer[..content_end], cursor, at_eof) {
                    ScanOutcome::Found(found) => found,
                    ScanOutcome::Exhausted { resume } => break resume,
                };
                let Some(patch) = patches.get(found.patch) else {
                    break content_end;
                };

                let region = found.position..found.position + patch.len();
                let original = buffer[region.clone()].to_vec();
                patch.replacement().apply(&mut buffer[region.clone()]);
                replaced += 1;

                let event = ReplaceEvent {
                    patch: found.patch,
                    offset: offset + found.position as u64,
                    original: &original,
                    patched: &buffer[region.clone()],
                };
                log::debug!(
                    "Patching {} with {} at offset 0x{:X} ({})",
                    HexUtils::to_hex(event.original),
                    HexUtils::to_hex(event.patched),
                    event.offset,
                    event.patch
                );
                observer.on_replace(&event);
                cursor = region.end;

                for id in patches.retire_satisfied() {
                    log::debug!(
                        "{} reached its target, overlap is now {} bytes",
                        id,
                        patches.overlap_capacity()
                    );
                }
            };

            let tail = if at_eof { 0 } else { content_end - resume };
            let flushed = content_end - tail;
            output.write_all(&buffer[..flushed])?;
            offset += flushed as u64;
            observer.on_progress(offset);

            log::trace!("Chunk read {} bytes, wrote {} bytes, carrying {}", read, flushed, tail);

            if at_eof {
                break;
            }

            buffer.copy_within(flushed..content_end, 0);
            carried = tail;

            if carried == 0 && patches.active_count() == 0 {
                log::debug!("No active patches left, copying the remainder");
                offset += io::copy(&mut input, &mut output)?;
                observer.on_progress(offset);
                break;
            }
        }

        output.flush()?;

        let report = PatchReport::from_patches(patches, replaced, offset);
        for missing in report.missing() {
            log::warn!(
                "{} ({} occurrence) not found, seen {} times",
                missing.id,
                missing.occurrence,
                missing.occurrences_seen
            );
        }
        log::info!(
            "Run complete: {} replacements, {} patches not found, {} bytes written",
            report.replaced,
            report.not_found,
            report.bytes_written
        );

        Ok(report)
    }
}

impl Default for StreamPatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn read_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match input.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}
