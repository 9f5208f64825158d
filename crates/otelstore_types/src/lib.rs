pub mod attribute;
pub mod error;
pub mod ids;
pub mod logs;
pub mod trace;
pub mod util;

pub use attribute::{merge_attributes, normalize_attributes, AttributeValue, Attributes};
pub use error::RecordError;
pub use ids::{SpanId, TraceId};
pub use logs::{exp_identifier, LogRecords, LogServerRecord, TraceLogRecord, EXP_IDENTIFIER};
pub use trace::{SpanEventRecord, TraceRecords, TraceServerRecord, TraceSpanRecord};
pub use util::nanos_to_datetime;
