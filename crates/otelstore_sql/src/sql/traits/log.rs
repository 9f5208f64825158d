use crate::sql::error::SqlError;
use crate::sql::query::Queries;

use async_trait::async_trait;
use otelstore_types::TraceLogRecord;
use sqlx::{postgres::PgQueryResult, types::Json, PgConnection};
use tracing::error;

#[async_trait]
pub trait LogSqlLogic {
    /// Inserts a batch of trace-correlated log records.
    ///
    /// # Arguments
    /// * `conn` - Connection of the open transaction
    /// * `logs` - The log records to insert
    async fn insert_log_batch(
        conn: &mut PgConnection,
        logs: &[TraceLogRecord],
    ) -> Result<PgQueryResult, SqlError> {
        let query = Queries::InsertLogs.get_query();
        let capacity = logs.len();

        let mut trace_id = Vec::with_capacity(capacity);
        let mut span_id = Vec::with_capacity(capacity);
        let mut log_id = Vec::with_capacity(capacity);
        let mut severity = Vec::with_capacity(capacity);
        let mut time = Vec::with_capacity(capacity);
        let mut attributes = Vec::with_capacity(capacity);
        let mut body = Vec::with_capacity(capacity);

        for log in logs {
            trace_id.push(log.trace_id.to_hex());
            span_id.push(log.span_id.to_hex());
            log_id.push(log.log_id);
            severity.push(log.severity.as_str());
            time.push(log.time);
            attributes.push(Json(log.attributes.clone()));
            body.push(log.body.as_deref());
        }

        let query_result = sqlx::query(query)
            .bind(trace_id)
            .bind(span_id)
            .bind(log_id)
            .bind(severity)
            .bind(time)
            .bind(attributes)
            .bind(body)
            .execute(&mut *conn)
            .await
            .inspect_err(|e| error!("Error inserting logs: {:?}", e))?;

        Ok(query_result)
    }
}
