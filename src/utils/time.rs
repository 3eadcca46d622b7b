//! Timestamp helpers. Every history entry carries a human-readable
//! local timestamp; the format sorts lexicographically in
//! chronological order, which the recent-activity view relies on.

use chrono::Local;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as "YYYY-MM-DD HH:MM:SS".
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
