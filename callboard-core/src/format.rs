//! Display formatting for durations and timestamps.

use crate::Timestamp;

/// `m:ss`, minutes unpadded and unbounded.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Short month, day and 12-hour clock, e.g. `Oct 15, 02:30 PM`.
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format("%b %-d, %I:%M %p").to_string()
}
