use crate::error::RecordError;
use std::fmt;

pub const TRACE_ID_LEN: usize = 16;
pub const SPAN_ID_LEN: usize = 8;

/// Raw 16 byte OTLP trace identifier. Stored as lowercase hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TraceId([u8; TRACE_ID_LEN]);

impl TraceId {
    pub fn from_bytes(bytes: [u8; TRACE_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, RecordError> {
        let bytes: [u8; TRACE_ID_LEN] =
            slice.try_into().map_err(|_| RecordError::InvalidIdLength {
                field: "trace_id",
                expected: TRACE_ID_LEN,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Raw 8 byte OTLP span identifier. Stored as lowercase hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SpanId([u8; SPAN_ID_LEN]);

impl SpanId {
    pub fn from_bytes(bytes: [u8; SPAN_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, RecordError> {
        Self::from_field_slice("span_id", slice)
    }

    /// Parent span ids are optional on the wire: an empty byte string means
    /// the span is a root.
    pub fn parent_from_slice(slice: &[u8]) -> Result<Option<Self>, RecordError> {
        if slice.is_empty() {
            return Ok(None);
        }
        Self::from_field_slice("parent_span_id", slice).map(Some)
    }

    fn from_field_slice(field: &'static str, slice: &[u8]) -> Result<Self, RecordError> {
        let bytes: [u8; SPAN_ID_LEN] =
            slice.try_into().map_err(|_| RecordError::InvalidIdLength {
                field,
                expected: SPAN_ID_LEN,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
