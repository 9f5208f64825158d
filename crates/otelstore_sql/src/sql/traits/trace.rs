use crate::sql::error::SqlError;
use crate::sql::query::Queries;

use async_trait::async_trait;
use otelstore_types::{SpanEventRecord, TraceSpanRecord};
use sqlx::{postgres::PgQueryResult, types::Json, PgConnection};
use tracing::error;

#[async_trait]
pub trait TraceSqlLogic {
    /// Inserts a batch of span records with a single UNNEST statement.
    ///
    /// # Arguments
    /// * `conn` - Connection of the open transaction
    /// * `spans` - The span records to insert
    async fn insert_span_batch(
        conn: &mut PgConnection,
        spans: &[TraceSpanRecord],
    ) -> Result<PgQueryResult, SqlError> {
        let query = Queries::InsertSpans.get_query();
        let capacity = spans.len();

        let mut trace_id = Vec::with_capacity(capacity);
        let mut span_id = Vec::with_capacity(capacity);
        let mut parent_span_id = Vec::with_capacity(capacity);
        let mut start_time = Vec::with_capacity(capacity);
        let mut end_time = Vec::with_capacity(capacity);
        let mut name = Vec::with_capacity(capacity);
        let mut status = Vec::with_capacity(capacity);
        let mut attributes = Vec::with_capacity(capacity);
        let mut state = Vec::with_capacity(capacity);

        for span in spans {
            trace_id.push(span.trace_id.to_hex());
            span_id.push(span.span_id.to_hex());
            parent_span_id.push(span.parent_span_id.as_ref().map(|id| id.to_hex()));
            start_time.push(span.start_time);
            end_time.push(span.end_time);
            name.push(span.name.as_str());
            status.push(span.status);
            attributes.push(Json(span.attributes.clone()));
            state.push(span.state.as_str());
        }

        let query_result = sqlx::query(query)
            .bind(trace_id)
            .bind(span_id)
            .bind(parent_span_id)
            .bind(start_time)
            .bind(end_time)
            .bind(name)
            .bind(status)
            .bind(attributes)
            .bind(state)
            .execute(&mut *conn)
            .await
            .inspect_err(|e| error!("Error inserting spans: {:?}", e))?;

        Ok(query_result)
    }

    /// Inserts a batch of span events. Their spans must already exist in the
    /// same transaction.
    async fn insert_event_batch(
        conn: &mut PgConnection,
        events: &[SpanEventRecord],
    ) -> Result<PgQueryResult, SqlError> {
        let query = Queries::InsertEvents.get_query();
        let capacity = events.len();

        let mut trace_id = Vec::with_capacity(capacity);
        let mut span_id = Vec::with_capacity(capacity);
        let mut event_no = Vec::with_capacity(capacity);
        let mut time = Vec::with_capacity(capacity);
        let mut name = Vec::with_capacity(capacity);
        let mut attributes = Vec::with_capacity(capacity);

        for event in events {
            trace_id.push(event.trace_id.to_hex());
            span_id.push(event.span_id.to_hex());
            event_no.push(event.event_no);
            time.push(event.time);
            name.push(event.name.as_str());
            attributes.push(Json(event.attributes.clone()));
        }

        let query_result = sqlx::query(query)
            .bind(trace_id)
            .bind(span_id)
            .bind(event_no)
            .bind(time)
            .bind(name)
            .bind(attributes)
            .execute(&mut *conn)
            .await
            .inspect_err(|e| error!("Error inserting span events: {:?}", e))?;

        Ok(query_result)
    }
}
