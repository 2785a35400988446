// Fri Oct 16 2026 - Alex

pub mod config;
pub mod engine;
pub mod patch;
pub mod pattern;
pub mod ui;
pub mod utils;

pub use config::PatcherConfig;
pub use engine::{PatchReport, Patcher, StreamPatcher};
pub use patch::{Occurrence, Patch, PatchId, PatchSet};
pub use pattern::{MaskedByte, Pattern, Wildcard};
