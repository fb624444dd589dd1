//! Timestamp formatting for persisted records

use chrono::Utc;

/// Textual timestamp format stored in the database: `YYYY-MM-DDTHH:MM:SSZ`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current UTC time at second precision with a `Z` suffix.
pub fn utc_now_iso() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
