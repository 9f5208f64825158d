use crate::attribute::{merge_attributes, normalize_attributes, Attributes};
use crate::error::RecordError;
use crate::ids::{SpanId, TraceId};
use crate::util::nanos_to_datetime;
use chrono::{DateTime, Utc};
use opentelemetry_proto::tonic::collector::trace::v1::ExportTraceServiceRequest;
use opentelemetry_proto::tonic::trace::v1::span::Event;

/// Row of the `span` table.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceSpanRecord {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    pub parent_span_id: Option<SpanId>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub name: String,
    pub status: i32,
    pub attributes: Attributes,
    pub state: String,
}

/// Row of the `event` table. `event_no` is the position of the event inside
/// its span in the request that delivered it.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanEventRecord {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    pub event_no: i32,
    pub time: DateTime<Utc>,
    pub name: String,
    pub attributes: Attributes,
}

pub type TraceRecords = (Vec<TraceSpanRecord>, Vec<SpanEventRecord>);

#[derive(Clone, Debug, Default)]
pub struct TraceServerRecord {
    pub request: ExportTraceServiceRequest,
}

impl TraceServerRecord {
    pub fn new(request: ExportTraceServiceRequest) -> Self {
        Self { request }
    }

    fn events_to_records(
        trace_id: &TraceId,
        span_id: &SpanId,
        events: &[Event],
    ) -> Result<Vec<SpanEventRecord>, RecordError> {
        events
            .iter()
            .enumerate()
            .map(|(position, event)| {
                let event_no = i32::try_from(position)
                    .map_err(|_| RecordError::EventIndexOverflow(position))?;

                Ok(SpanEventRecord {
                    trace_id: *trace_id,
                    span_id: *span_id,
                    event_no,
                    time: nanos_to_datetime(event.time_unix_nano)?,
                    name: event.name.clone(),
                    attributes: normalize_attributes(&event.attributes),
                })
            })
            .collect()
    }

    /// Build the full span and event batch for one export request. Any
    /// malformed span fails the whole batch.
    pub fn to_records(self) -> Result<TraceRecords, RecordError> {
        let resource_spans = self.request.resource_spans;

        let estimated_capacity: usize = resource_spans
            .iter()
            .map(|rs| {
                rs.scope_spans
                    .iter()
                    .map(|ss| ss.spans.len())
                    .sum::<usize>()
            })
            .sum();

        let mut span_records: Vec<TraceSpanRecord> = Vec::with_capacity(estimated_capacity);
        let mut event_records: Vec<SpanEventRecord> = Vec::new();

        for resource_span in resource_spans {
            let resource_attributes = resource_span
                .resource
                .as_ref()
                .map(|r| normalize_attributes(&r.attributes))
                .unwrap_or_default();

            for scope_span in resource_span.scope_spans {
                let scope_attributes = scope_span
                    .scope
                    .as_ref()
                    .map(|s| normalize_attributes(&s.attributes))
                    .unwrap_or_default();

                for span in scope_span.spans {
                    let trace_id = TraceId::from_slice(&span.trace_id)?;
                    let span_id = SpanId::from_slice(&span.span_id)?;
                    let parent_span_id = SpanId::parent_from_slice(&span.parent_span_id)?;

                    event_records.extend(Self::events_to_records(
                        &trace_id,
                        &span_id,
                        &span.events,
                    )?);

                    span_records.push(TraceSpanRecord {
                        trace_id,
                        span_id,
                        parent_span_id,
                        start_time: nanos_to_datetime(span.start_time_unix_nano)?,
                        end_time: nanos_to_datetime(span.end_time_unix_nano)?,
                        name: span.name,
                        status: span.status.as_ref().map(|s| s.code).unwrap_or(0),
                        attributes: merge_attributes(
                            &resource_attributes,
                            &scope_attributes,
                            normalize_attributes(&span.attributes),
                        ),
                        state: span.trace_state,
                    });
                }
            }
        }

        Ok((span_records, event_records))
    }
}
