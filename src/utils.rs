//! Timestamp helpers used by [`crate::FileStat`].
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::Error;

/// Formats a `SystemTime` into a RFC 3339 - Z format with milliseconds.
/// For example "2018-01-26T18:30:09.453Z"
pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds a `SystemTime` from a RFC 3339 formatted string.
pub fn parse_system_time(s: &str) -> Result<SystemTime, Error> {
    let datetime = DateTime::parse_from_rfc3339(s).map_err(|e| Error::Parse {
        what: format!("timestamp {s}"),
        how: e.to_string(),
    })?;
    Ok(SystemTime::from(datetime))
}
