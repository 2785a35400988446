// Fri Oct 16 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, PatchSpec};
pub use handler::CommandHandler;
