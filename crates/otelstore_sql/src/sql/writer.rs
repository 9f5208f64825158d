use crate::sql::error::SqlError;
use crate::sql::postgres::PostgresClient;
use crate::sql::traits::{LogSqlLogic, TraceSqlLogic};
use async_trait::async_trait;
use otelstore_types::{SpanEventRecord, TraceLogRecord, TraceSpanRecord};
use tracing::{debug, instrument};

/// Persists one mapped export request. Every call is all-or-nothing: a
/// failure leaves no rows from the batch behind.
#[async_trait]
pub trait TelemetryWriter: Send + Sync {
    async fn write_spans(
        &self,
        spans: &[TraceSpanRecord],
        events: &[SpanEventRecord],
    ) -> Result<(), SqlError>;

    async fn write_logs(&self, logs: &[TraceLogRecord]) -> Result<(), SqlError>;
}

#[async_trait]
impl TelemetryWriter for PostgresClient {
    #[instrument(skip_all)]
    async fn write_spans(
        &self,
        spans: &[TraceSpanRecord],
        events: &[SpanEventRecord],
    ) -> Result<(), SqlError> {
        if spans.is_empty() && events.is_empty() {
            return Ok(());
        }

        // dropping the transaction on any early return rolls it back
        let mut tx = self.pool.begin().await?;

        if !spans.is_empty() {
            Self::insert_span_batch(&mut tx, spans).await?;
        }

        if !events.is_empty() {
            Self::insert_event_batch(&mut tx, events).await?;
        }

        tx.commit().await?;

        debug!(spans = spans.len(), events = events.len(), "Committed span batch");
        Ok(())
    }

    #[instrument(skip_all)]
    async fn write_logs(&self, logs: &[TraceLogRecord]) -> Result<(), SqlError> {
        if logs.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        Self::insert_log_batch(&mut tx, logs).await?;
        tx.commit().await?;

        debug!(logs = logs.len(), "Committed log batch");
        Ok(())
    }
}
