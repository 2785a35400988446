// Fri Oct 16 2026 - Alex

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BYTES_TEMPLATE: &str =
    "{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {msg}";

pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            enabled: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// A byte-counting bar, hidden when progress is disabled.
    pub fn create_bytes_bar(&self, total: u64, message: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(total);
        bar.set_draw_target(ProgressDrawTarget::stderr());
        match ProgressStyle::default_bar().template(BYTES_TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("█▓▒░ ")),
            Err(e) => log::debug!("Invalid progress template: {}", e),
        }
        bar.set_message(message.to_string());
        bar
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_bar_is_hidden() {
        let bar = ProgressManager::new().with_enabled(false).create_bytes_bar(100, "Patching");
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_bar_length() {
        let bar = ProgressManager::new().create_bytes_bar(1234, "Patching");
        assert_eq!(bar.length(), Some(1234));
    }
}
