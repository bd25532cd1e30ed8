//! Timestamp helpers.

use chrono::{SecondsFormat, Utc};

/// Get the current Unix timestamp in milliseconds (UTC).
pub fn utc_now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Get the current UTC time as an RFC 3339 string with millisecond precision.
///
/// This is the wire format of message timestamps.
pub fn utc_now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
