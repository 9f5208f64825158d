use async_trait::async_trait;
use opentelemetry_proto::tonic::common::v1::{any_value, AnyValue, KeyValue};
use otelstore_server::api::grpc::serve_grpc;
use otelstore_server::api::state::AppState;
use otelstore_settings::ServerConfig;
use otelstore_sql::{SqlError, TelemetryWriter};
use otelstore_tonic::{LogsServiceClient, TraceServiceClient};
use otelstore_types::{SpanEventRecord, TraceLogRecord, TraceSpanRecord};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tonic::transport::Channel;

/// Writer that keeps committed batches in memory. When `unavailable` is set
/// every write fails the way a timed-out pool does.
#[derive(Default)]
pub struct InMemoryWriter {
    pub spans: Mutex<Vec<TraceSpanRecord>>,
    pub events: Mutex<Vec<SpanEventRecord>>,
    pub logs: Mutex<Vec<TraceLogRecord>>,
    pub unavailable: AtomicBool,
}

#[async_trait]
impl TelemetryWriter for InMemoryWriter {
    async fn write_spans(
        &self,
        spans: &[TraceSpanRecord],
        events: &[SpanEventRecord],
    ) -> Result<(), SqlError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SqlError::from(sqlx::Error::PoolTimedOut));
        }

        self.spans.lock().unwrap().extend_from_slice(spans);
        self.events.lock().unwrap().extend_from_slice(events);
        Ok(())
    }

    async fn write_logs(&self, logs: &[TraceLogRecord]) -> Result<(), SqlError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SqlError::from(sqlx::Error::PoolTimedOut));
        }

        self.logs.lock().unwrap().extend_from_slice(logs);
        Ok(())
    }
}

pub struct TestHelper {
    pub addr: SocketAddr,
    pub writer: Arc<InMemoryWriter>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestHelper {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn trace_client(&self) -> TraceServiceClient<Channel> {
        TraceServiceClient::connect(self.url()).await.unwrap()
    }

    pub async fn logs_client(&self) -> LogsServiceClient<Channel> {
        LogsServiceClient::connect(self.url()).await.unwrap()
    }
}

impl Drop for TestHelper {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Serve the full gRPC stack on an ephemeral port backed by an in-memory
/// writer.
pub async fn setup_test() -> TestHelper {
    let writer = Arc::new(InMemoryWriter::default());
    let state = Arc::new(AppState::new(
        writer.clone(),
        Arc::new(ServerConfig::default()),
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        serve_grpc(state, listener, async {
            let _ = shutdown_rx.await;
        })
        .await
        .unwrap();
    });

    TestHelper {
        addr,
        writer,
        shutdown_tx: Some(shutdown_tx),
    }
}

pub fn str_kv(key: &str, value: &str) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(AnyValue {
            value: Some(any_value::Value::StringValue(value.to_string())),
        }),
    }
}
