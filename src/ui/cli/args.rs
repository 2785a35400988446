// Fri Oct 16 2026 - Alex

use crate::patch::{Occurrence, PatchError};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const AFTER_HELP: &str = "\
- Pattern and replacement are hexadecimal strings without spaces, e.g. DEADBEEF BAADC0DE.
- Use ? for wildcard nibbles in the pattern and the replacement, e.g. DE??BEEF BAADC0DE,
  or DE??BEEF BA??C0DE to keep the wildcard content unchanged.
- Occurrence is 'all' or a number starting from 1.

Example: file-patcher myfile myfile_patched DE??BEEF BA??C0DE 1";

#[derive(Parser, Debug)]
#[command(name = "file-patcher")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Search and replace byte patterns in binary files of any size", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    pub input: PathBuf,

    pub output: PathBuf,

    pub pattern: String,

    pub replacement: String,

    pub occurrence: Occurrence,

    /// Additional patch, applied with lower priority than the ones before it
    #[arg(long = "patch", value_name = "PATTERN:REPLACEMENT:OCCURRENCE")]
    pub extra_patches: Vec<PatchSpec>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub chunk_size: Option<usize>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long)]
    pub no_progress: bool,

    #[arg(long)]
    pub json_output: bool,
}

impl Args {
    /// The positional patch first, then every `--patch` in command-line order.
    pub fn patch_specs(&self) -> Vec<PatchSpec> {
        let mut specs = vec![PatchSpec {
            pattern: self.pattern.clone(),
            replacement: self.replacement.clone(),
            occurrence: self.occurrence,
        }];
        specs.extend(self.extra_patches.iter().cloned());
        specs
    }

    pub fn validate(&self) -> Result<(), String> {
        if same_file(&self.input, &self.output) {
            return Err("Input and output must be different files".to_string());
        }
        if self.chunk_size == Some(0) {
            return Err("Chunk size must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Paths only resolve to the same file when both exist, so a fresh output never collides.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    pub pattern: String,
    pub replacement: String,
    pub occurrence: Occurrence,
}

impl FromStr for PatchSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [pattern, replacement, occurrence] => Ok(Self {
                pattern: pattern.to_string(),
                replacement: replacement.to_string(),
                occurrence: occurrence.parse().map_err(|e: PatchError| e.to_string())?,
            }),
            [pattern, replacement] => Ok(Self {
                pattern: pattern.to_string(),
                replacement: replacement.to_string(),
                occurrence: Occurrence::All,
            }),
            _ => Err(format!("Invalid patch '{}': expected PATTERN:REPLACEMENT[:OCCURRENCE]", s)),
        }
    }
}
