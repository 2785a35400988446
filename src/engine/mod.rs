// Fri Oct 16 2026 - Alex

pub mod core;
pub mod error;
pub mod matcher;
pub mod observer;
pub mod result;
pub mod stream;

pub use self::core::{Patcher, PatcherState};
pub use error::EngineError;
pub use matcher::{Match, MultiPatternMatcher, ScanOutcome};
pub use observer::{NoopObserver, PatchObserver, RecordedReplacement, RecordingObserver, ReplaceEvent};
pub use result::{PatchOutcome, PatchReport};
pub use stream::{StreamPatcher, DEFAULT_CHUNK_SIZE};
