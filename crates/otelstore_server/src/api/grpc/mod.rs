pub mod logs;
pub mod trace;

use crate::api::shutdown::shutdown_signal;
use crate::api::state::AppState;
use anyhow::{Context, Result};
pub use logs::LogsGrpcService;
use otelstore_tonic::{LogsServiceServer, TraceServiceServer, FILE_DESCRIPTOR_SET};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
pub use trace::TraceGrpcService;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{info, instrument};

/// Bind the configured address and serve until a shutdown signal arrives.
#[instrument(skip_all)]
pub async fn start_grpc_server(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.grpc_settings.bind_address();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind gRPC server to {addr}"))?;

    info!("🚀 gRPC server started successfully on {}", addr);

    serve_grpc(state, listener, shutdown_signal()).await
}

/// Serve the export, health and reflection services on `listener`.
///
/// In-flight calls are drained once `signal` resolves.
pub async fn serve_grpc<F>(state: Arc<AppState>, listener: TcpListener, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (health_reporter, health_service) = health_reporter();

    let trace_service = TraceGrpcService::new(state.clone()).into_server();
    let logs_service = LogsGrpcService::new(state.clone()).into_server();

    health_reporter
        .set_serving::<TraceServiceServer<TraceGrpcService>>()
        .await;
    health_reporter
        .set_serving::<LogsServiceServer<LogsGrpcService>>()
        .await;

    let reflection_v1 = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()
        .with_context(|| "Failed to build reflection service")?;

    let reflection_v1alpha = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1alpha()
        .with_context(|| "Failed to build v1alpha reflection service")?;

    Server::builder()
        .add_service(health_service)
        .add_service(reflection_v1)
        .add_service(reflection_v1alpha)
        .add_service(trace_service)
        .add_service(logs_service)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
        .await
        .with_context(|| "gRPC server failed")?;

    info!("gRPC server stopped");

    Ok(())
}
