//! Units formatting helpers
//!
//! Human-readable sizes, durations and rates for the diagnostics log.

use std::time::Duration;

/// Format bytes into human-readable size with binary units
///
/// # Examples
/// ```
/// use gapread::util::units::format_bytes;
///
/// assert_eq!(format_bytes(65536), "64.0 KiB");
/// assert_eq!(format_bytes(134217728), "128.0 MiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format a duration, coarser units first
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use gapread::util::units::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(format_duration(Duration::from_secs(75)), "1m 15s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 3600 {
        format!("{}h {}m {}s", total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60)
    } else if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else if total_secs > 0 {
        format!("{}.{:02}s", total_secs, millis / 10)
    } else {
        format!("{}ms", millis)
    }
}

/// Format a per-operation latency
pub fn format_latency(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros >= 1000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{}μs", micros)
    }
}

/// Throughput in MB/s (1 MB = 1 MiB), zero for an empty interval
pub fn calculate_throughput_mbps(bytes: u64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    bytes as f64 / 1_048_576.0 / duration.as_secs_f64()
}

/// Operations per second, zero for an empty interval
pub fn calculate_iops(operations: u64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    operations as f64 / duration.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(8), "8 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(1073741824), "1.0 GiB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m 1s");
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(format_latency(Duration::from_micros(80)), "80μs");
        assert_eq!(format_latency(Duration::from_micros(62_500)), "62.50ms");
    }

    #[test]
    fn test_rates() {
        let throughput = calculate_throughput_mbps(64 * 1024 * 1024, Duration::from_secs(2));
        assert!((throughput - 32.0).abs() < 0.01);
        assert_eq!(calculate_throughput_mbps(1000, Duration::ZERO), 0.0);

        let iops = calculate_iops(500, Duration::from_millis(250));
        assert!((iops - 2000.0).abs() < 0.01);
        assert_eq!(calculate_iops(10, Duration::ZERO), 0.0);
    }
}
