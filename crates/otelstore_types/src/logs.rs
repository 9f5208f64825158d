use crate::attribute::{merge_attributes, normalize_attributes, AttributeValue, Attributes};
use crate::error::RecordError;
use crate::ids::{SpanId, TraceId};
use crate::util::nanos_to_datetime;
use chrono::{DateTime, Utc};
use opentelemetry_proto::tonic::collector::logs::v1::ExportLogsServiceRequest;
use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Attribute key carrying the content-derived duplicate-delivery marker.
pub const EXP_IDENTIFIER: &str = "exp_identifier";

/// Row of the `log` table. Only logs carrying trace context are stored.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceLogRecord {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    pub log_id: Uuid,
    pub severity: String,
    pub time: DateTime<Utc>,
    pub attributes: Attributes,
    pub body: Option<String>,
}

/// Outcome of mapping one logs export request.
#[derive(Clone, Debug, Default)]
pub struct LogRecords {
    pub logs: Vec<TraceLogRecord>,
    /// Records skipped because they lacked a trace or span id.
    pub dropped: usize,
}

/// SHA-1 of `{trace_id}-{span_id}-{time_unix_nano}` as lowercase hex.
///
/// Downstream consumers use it to spot redelivered logs; the value is
/// deterministic for identical inputs.
pub fn exp_identifier(trace_id: &str, span_id: &str, time_unix_nano: u64) -> String {
    let identifier = format!("{trace_id}-{span_id}-{time_unix_nano}");
    hex::encode(Sha1::digest(identifier.as_bytes()))
}

#[derive(Clone, Debug, Default)]
pub struct LogServerRecord {
    pub request: ExportLogsServiceRequest,
}

impl LogServerRecord {
    pub fn new(request: ExportLogsServiceRequest) -> Self {
        Self { request }
    }

    /// Build the log batch for one export request.
    ///
    /// Records without both a trace id and a span id are dropped silently and
    /// only counted. Any malformed record fails the whole batch.
    pub fn to_records(self) -> Result<LogRecords, RecordError> {
        let mut records = LogRecords::default();

        for resource_log in self.request.resource_logs {
            let resource_attributes = resource_log
                .resource
                .as_ref()
                .map(|r| normalize_attributes(&r.attributes))
                .unwrap_or_default();

            for scope_log in resource_log.scope_logs {
                let scope_attributes = scope_log
                    .scope
                    .as_ref()
                    .map(|s| normalize_attributes(&s.attributes))
                    .unwrap_or_default();

                for log_record in scope_log.log_records {
                    if log_record.trace_id.is_empty() || log_record.span_id.is_empty() {
                        records.dropped += 1;
                        continue;
                    }

                    let trace_id = TraceId::from_slice(&log_record.trace_id)?;
                    let span_id = SpanId::from_slice(&log_record.span_id)?;

                    let mut attributes = merge_attributes(
                        &resource_attributes,
                        &scope_attributes,
                        normalize_attributes(&log_record.attributes),
                    );
                    attributes.insert(
                        EXP_IDENTIFIER.to_string(),
                        AttributeValue::String(exp_identifier(
                            &trace_id.to_hex(),
                            &span_id.to_hex(),
                            log_record.time_unix_nano,
                        )),
                    );

                    records.logs.push(TraceLogRecord {
                        trace_id,
                        span_id,
                        log_id: Uuid::new_v4(),
                        severity: log_record.severity_text,
                        time: nanos_to_datetime(log_record.time_unix_nano)?,
                        attributes,
                        body: AttributeValue::from_any_value(log_record.body.as_ref()).to_text(),
                    });
                }
            }
        }

        Ok(records)
    }
}
