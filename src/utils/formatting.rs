//! Text formatting utilities for the list viewer.

use rlistview::WindowBounds;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a count with thousands separators, e.g. `12,345`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Describes the materialized row range for the status bar.
pub fn format_window(window: Option<WindowBounds>, total_rows: usize) -> String {
    match window {
        None => format!("All {} rows", format_count(total_rows)),
        Some(_) if total_rows == 0 => "No rows".to_string(),
        Some(window) => {
            let last = window.end().min(total_rows - 1);
            if window.start > last {
                format!("Rows -/{}", format_count(total_rows))
            } else {
                format!(
                    "Rows {}..{} of {}",
                    format_count(window.start),
                    format_count(last),
                    format_count(total_rows)
                )
            }
        }
    }
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    sys.process(Pid::from_u32(std::process::id()))
        .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_window() {
        assert_eq!(format_window(None, 1200), "All 1,200 rows");
        assert_eq!(format_window(Some(WindowBounds::new(0, 5)), 0), "No rows");
        assert_eq!(format_window(Some(WindowBounds::new(10, 5)), 100), "Rows 10..15 of 100");
        assert_eq!(format_window(Some(WindowBounds::new(10, 50)), 20), "Rows 10..19 of 20");
        assert_eq!(format_window(Some(WindowBounds::new(30, 5)), 20), "Rows -/20");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
