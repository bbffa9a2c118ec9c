//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅ ", "[OK] ");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌ ", "[FAIL] ");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️  ", "[WARN] ");

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use bundlesize::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an integer with comma thousands separators
///
/// Takes `i128` so every `u64` size and every difference of two sizes fits.
///
/// # Examples
///
/// ```
/// use bundlesize::fmt::format_count;
///
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// assert_eq!(format_count(-1_000), "-1,000");
/// ```
pub fn format_count(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Like [`format_count`] but always carries a sign (`+0` for zero)
pub fn format_signed_count(value: i128) -> String {
    if value >= 0 {
        format!("+{}", format_count(value))
    } else {
        format_count(value)
    }
}

/// Format a fraction as a percentage with one decimal (`0.305` -> `30.5%`)
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
