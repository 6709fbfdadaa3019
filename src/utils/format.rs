//! Display Formatting
//!
//! Pure helpers turning raw backend values into display strings.

/// Format a byte count with base-1024 units.
///
/// At most two decimals, trailing zeros trimmed; values past TB stay in TB.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", formatted, UNITS[unit])
}

/// Format an uptime in seconds as its coarsest two-unit representation:
/// days+hours, hours+minutes, or minutes.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// First 8 characters of an identifier for display
pub fn short_id(id: &str) -> String {
    truncate_id(id, 8)
}

/// First `len` characters of an identifier; shorter strings are returned
/// unchanged. Char-boundary safe.
pub fn truncate_id(id: &str, len: usize) -> String {
    id.chars().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn test_format_bytes_picks_largest_fitting_unit() {
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_bytes(1024_u64.pow(4)), "1 TB");
    }

    #[test]
    fn test_format_bytes_trims_trailing_zeros() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_572_864), "1.5 MB");
        assert_eq!(format_bytes(2_684_354_560), "2.5 GB");
    }

    #[test]
    fn test_format_bytes_past_tb_stays_in_tb() {
        assert_eq!(format_bytes(1024_u64.pow(5)), "1024 TB");
    }

    #[test]
    fn test_format_uptime_minutes_only() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(60), "1m");
        assert_eq!(format_uptime(3599), "59m");
    }

    #[test]
    fn test_format_uptime_hours_and_minutes() {
        assert_eq!(format_uptime(3600), "1h 0m");
        assert_eq!(format_uptime(3661), "1h 1m");
        assert_eq!(format_uptime(86_399), "23h 59m");
    }

    #[test]
    fn test_format_uptime_days_and_hours() {
        assert_eq!(format_uptime(86_400), "1d 0h");
        assert_eq!(format_uptime(90_000), "1d 1h");
        assert_eq!(format_uptime(10 * 86_400 + 5 * 3_600), "10d 5h");
    }

    #[test]
    fn test_short_id_truncates_to_eight() {
        let id = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
        assert_eq!(short_id(id), "6ba7b810");
        assert_eq!(short_id(id).chars().count(), 8);
    }

    #[test]
    fn test_short_id_keeps_short_input() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_truncate_id_respects_char_boundaries() {
        assert_eq!(truncate_id("ααββγγδδεε", 8), "ααββγγδδ");
    }
}
