use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::error::RelayError;

const SOURCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts an analysis timestamp such as `2024-01-15T10:30:00+0000` into
/// the given timezone, rendered as `YYYY-MM-DD hh:mm:ss`.
///
/// The `+offset` suffix is stripped and the remaining wall-clock time is
/// read as UTC before conversion. An unparseable timestamp is malformed
/// input, not a silent default.
pub fn convert_timestamp(raw: &str, timezone: Tz) -> Result<String, RelayError> {
    let wall_clock = match raw.split_once('+') {
        Some((head, _)) => head,
        None => raw,
    };

    let parsed = NaiveDateTime::parse_from_str(wall_clock, SOURCE_FORMAT).map_err(|e| {
        RelayError::MalformedPayload(format!("invalid analysedAt timestamp '{raw}': {e}"))
    })?;

    Ok(parsed
        .and_utc()
        .with_timezone(&timezone)
        .format(DISPLAY_FORMAT)
        .to_string())
}
