// Fri Oct 16 2026 - Alex

use crate::engine::{PatchObserver, PatchReport, ReplaceEvent};
use crate::patch::PatchSet;
use crate::utils::HexUtils;
use colored::*;
use indicatif::ProgressBar;

const MAX_HEX_BYTES: usize = 32;

/// Prints each replacement the way the patcher always has, and drives the progress bar.
pub struct ConsoleReporter {
    bar: ProgressBar,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format_event(&self, event: &ReplaceEvent<'_>) -> String {
        format!(
            "{} {}\n    with {}\n    at offset {}",
            "Patching".cyan(),
            HexUtils::to_hex_truncated(event.original, MAX_HEX_BYTES),
            HexUtils::to_hex_truncated(event.patched, MAX_HEX_BYTES).green(),
            format!("0x{:X}", event.offset).yellow()
        )
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl PatchObserver for ConsoleReporter {
    fn on_replace(&mut self, event: &ReplaceEvent<'_>) {
        if self.quiet {
            return;
        }
        self.bar.println(format!("{}\n", self.format_event(event)));
    }

    fn on_progress(&mut self, bytes_written: u64) {
        self.bar.set_position(bytes_written);
    }
}

pub fn print_summary(report: &PatchReport, patches: &PatchSet) {
    println!("{} {} replacement(s) performed", "[+]".green(), report.replaced);

    for outcome in report.missing() {
        let description = patches
            .get(outcome.id)
            .map(|p| p.to_string())
            .unwrap_or_default();
        println!(
            "{} {} not found: {} (seen {} time(s))",
            "[!]".yellow(),
            outcome.id,
            description,
            outcome.occurrences_seen
        );
    }

    if report.all_found() {
        println!("{}", "Patching completed successfully!".green().bold());
    } else {
        println!("{} {} patch(es) not found", "[!]".yellow(), report.not_found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchId;

    #[test]
    fn test_format_event() {
        colored::control::set_override(false);
        let reporter = ConsoleReporter::new(ProgressBar::hidden());
        let mut set = PatchSet::new();
        let id: PatchId = set.add(crate::patch::Patch::from_hex("AA", "BB", Default::default()).unwrap());
        let event = ReplaceEvent {
            patch: id,
            offset: 0x1F,
            original: &[0xDE, 0xAD],
            patched: &[0xBE, 0xEF],
        };

        assert_eq!(reporter.format_event(&event), "Patching DEAD\n    with BEEF\n    at offset 0x1F");
    }
}
