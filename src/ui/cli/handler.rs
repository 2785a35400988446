// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::config::PatcherConfig;
use crate::engine::{PatchReport, Patcher};
use crate::ui::display::{self, ConsoleReporter};
use crate::ui::progress::ProgressManager;
use crate::utils::LoggingUtils;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> Result<PatchReport> {
        self.setup_logging(&args)?;
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = self.load_config(&args)?;
        if !config.color {
            colored::control::set_override(false);
        }

        let mut patcher = Patcher::new(config.clone());
        for (index, spec) in args.patch_specs().iter().enumerate() {
            let lookup = Patcher::build_pattern(&spec.pattern)
                .with_context(|| format!("Invalid pattern '{}' (patch {})", spec.pattern, index + 1))?;
            let replacement = Patcher::build_pattern(&spec.replacement)
                .with_context(|| format!("Invalid replacement '{}' (patch {})", spec.replacement, index + 1))?;
            patcher
                .add_patch(lookup, replacement, spec.occurrence)
                .with_context(|| format!("Invalid patch {}", index + 1))?;
        }

        let total = fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);
        let show_progress = config.show_progress && !args.quiet && !args.json_output;
        let bar = ProgressManager::new()
            .with_enabled(show_progress)
            .create_bytes_bar(total, "Patching");
        let mut reporter = ConsoleReporter::new(bar).with_quiet(args.quiet || args.json_output);

        if !args.quiet && !args.json_output {
            println!("{}", "Patching started...".cyan());
            println!();
        }

        let result = patcher.execute_with_observer(&args.input, &args.output, &mut reporter);
        reporter.finish();
        let report = result.context("Patching failed")?;

        if args.json_output {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        } else if !args.quiet {
            display::print_summary(&report, patcher.patches());
        }

        Ok(report)
    }

    fn setup_logging(&self, args: &Args) -> Result<()> {
        let level = LoggingUtils::level_from_str(&args.log_level)
            .with_context(|| format!("Unknown log level '{}'", args.log_level))?;
        LoggingUtils::init_logger(level);
        Ok(())
    }

    fn load_config(&self, args: &Args) -> Result<PatcherConfig> {
        let mut config = match &args.config {
            Some(path) => PatcherConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => PatcherConfig::default(),
        };

        if let Some(chunk_size) = args.chunk_size {
            config = config.with_chunk_size(chunk_size);
        }
        if args.no_progress {
            config = config.with_progress(false);
        }
        if args.no_color {
            config = config.with_color(false);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
