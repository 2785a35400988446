// Fri Oct 16 2026 - Alex

pub mod error;
pub mod occurrence;
pub mod patch;
pub mod patch_set;

pub use error::PatchError;
pub use occurrence::Occurrence;
pub use patch::Patch;
pub use patch_set::{PatchId, PatchSet};
