// Fri Oct 16 2026 - Alex

pub mod hex;
pub mod logging;

pub use hex::HexUtils;
pub use logging::LoggingUtils;
