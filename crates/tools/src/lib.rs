pub mod ascii;
pub mod config_file;
pub mod dump;
pub mod logging;

pub const APP_NAME: &str = "Nozoki";

/// Format a grid fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}
