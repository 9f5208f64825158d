use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidIdLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Timestamp out of range: {0} nanoseconds since epoch")]
    TimestampOutOfRange(u64),

    #[error("Span event position {0} does not fit the event_no column")]
    EventIndexOverflow(usize),
}
