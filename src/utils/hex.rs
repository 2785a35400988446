// Fri Oct 16 2026 - Alex

use itertools::Itertools;

pub struct HexUtils;

impl HexUtils {
    /// `[0xDE, 0xAD]` -> `"DEAD"`.
    pub fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02X}", b)).join("")
    }

    pub fn to_hex_truncated(bytes: &[u8], max_bytes: usize) -> String {
        if bytes.len() <= max_bytes {
            Self::to_hex(bytes)
        } else {
            format!("{}...", Self::to_hex(&bytes[..max_bytes]))
        }
    }
}
