// Fri Oct 16 2026 - Alex

use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("Pattern and replacement must be of the same size ({lookup} vs {replacement} bytes)")]
    LengthMismatch { lookup: usize, replacement: usize },
    #[error("Invalid occurrence '{0}': expected 'all' or a number starting from 1")]
    InvalidOccurrence(String),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
