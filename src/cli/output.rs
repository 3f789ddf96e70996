//! Output formatting for CLI commands
//!
//! Colors and human-readable durations. Colored output respects the
//! NO_COLOR env var.

use chrono::{DateTime, TimeDelta, Utc};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for index names
    pub fn index_name(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format an elapsed time in milliseconds ("850ms", "2.40s", "1m 5.5s")
pub fn format_duration(ms: u64) -> String {
    match ms {
        0..=999 => format!("{ms}ms"),
        1_000..=59_999 => format!("{:.2}s", ms as f64 / 1000.0),
        _ => {
            let mins = ms / 60_000;
            let secs = (ms % 60_000) as f64 / 1000.0;
            format!("{mins}m {secs:.1}s")
        }
    }
}

/// Age of `timestamp` relative to now ("just now", "5m ago", "2d ago")
pub fn format_relative_time(timestamp: &DateTime<Utc>) -> String {
    let age = Utc::now().signed_duration_since(*timestamp);

    if age < TimeDelta::zero() {
        "in the future".to_string()
    } else if age.num_days() > 0 {
        format!("{}d ago", age.num_days())
    } else if age.num_hours() > 0 {
        format!("{}h ago", age.num_hours())
    } else if age.num_minutes() > 0 {
        format!("{}m ago", age.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}
