//! Duration formatting for the monthly report.
//!
//! All report values use the `"{h}h {mm}m"` shape: hours are not padded,
//! minutes always have two digits and leftover seconds are dropped.
//!
//! ```rust
//! use toggl_jira_worklog::libs::formatter::{format_balance, format_hours_minutes};
//!
//! assert_eq!(format_hours_minutes(8 * 3600 + 5 * 60), "8h 05m");
//! assert_eq!(format_balance(-90 * 60), "-1h 30m");
//! assert_eq!(format_balance(0), "+0h 00m");
//! ```

/// Formats seconds as `"{h}h {mm}m"`. Negative values get a leading `-`.
pub fn format_hours_minutes(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    format!("{}{}", sign, format_abs(seconds))
}

/// Formats a balance with an explicit sign, `+` for zero and surplus.
pub fn format_balance(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "+" };
    format!("{}{}", sign, format_abs(seconds))
}

fn format_abs(seconds: i64) -> String {
    let seconds = seconds.unsigned_abs();
    format!("{}h {:02}m", seconds / 3600, (seconds % 3600) / 60)
}
