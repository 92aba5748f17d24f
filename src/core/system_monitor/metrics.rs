/// Bytes per mebibyte used for all MB figures on the dashboard.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// One memory reading taken from the metrics provider
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySample {
    pub percent: f32,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl MemorySample {
    /// Build a sample from raw byte counts, deriving the percentage.
    pub fn from_bytes(used_bytes: u64, total_bytes: u64) -> Self {
        let percent = if total_bytes > 0 {
            (used_bytes as f64 / total_bytes as f64 * 100.0) as f32
        } else {
            0.0
        };

        Self {
            percent: clamp_percent(percent),
            used_bytes,
            total_bytes,
        }
    }
}

/// Floor division of a byte count into whole mebibytes.
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

/// Clamp a percentage into `[0, 100]`; NaN becomes 0.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
