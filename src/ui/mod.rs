// Fri Oct 16 2026 - Alex

pub mod cli;
pub mod display;
pub mod progress;

pub use cli::{Args, CommandHandler, PatchSpec};
pub use display::ConsoleReporter;
pub use progress::ProgressManager;
