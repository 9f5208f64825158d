use crate::error::RecordError;
use chrono::{DateTime, Utc};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Convert an OTLP `*_unix_nano` timestamp into a UTC instant.
///
/// Values above `i64::MAX` are split into seconds and sub-second nanos
/// before conversion.
pub fn nanos_to_datetime(timestamp_nanos: u64) -> Result<DateTime<Utc>, RecordError> {
    if let Ok(nanos) = i64::try_from(timestamp_nanos) {
        return Ok(DateTime::from_timestamp_nanos(nanos));
    }

    let seconds = (timestamp_nanos / NANOS_PER_SECOND) as i64;
    let nanoseconds = (timestamp_nanos % NANOS_PER_SECOND) as u32;

    DateTime::from_timestamp(seconds, nanoseconds)
        .ok_or(RecordError::TimestampOutOfRange(timestamp_nanos))
}
