//! OTLP gRPC definitions for otelstore.
//!
//! Message and service types are re-exported from `opentelemetry-proto`.
//! The crate also carries the encoded file descriptor set of the collector
//! services so the server can answer reflection requests.
//!
//! ## Features
//!
//! - `server`: Re-exports the `TraceService` and `LogsService` server traits
//! - `client`: Re-exports the generated export clients

pub use opentelemetry_proto::tonic::collector::logs::v1::{
    ExportLogsServiceRequest, ExportLogsServiceResponse,
};
pub use opentelemetry_proto::tonic::collector::trace::v1::{
    ExportTraceServiceRequest, ExportTraceServiceResponse,
};

#[cfg(feature = "server")]
pub use opentelemetry_proto::tonic::collector::logs::v1::logs_service_server::{
    LogsService, LogsServiceServer,
};
#[cfg(feature = "server")]
pub use opentelemetry_proto::tonic::collector::trace::v1::trace_service_server::{
    TraceService, TraceServiceServer,
};

#[cfg(feature = "client")]
pub use opentelemetry_proto::tonic::collector::logs::v1::logs_service_client::LogsServiceClient;
#[cfg(feature = "client")]
pub use opentelemetry_proto::tonic::collector::trace::v1::trace_service_client::TraceServiceClient;

pub const TRACE_SERVICE_NAME: &str = "opentelemetry.proto.collector.trace.v1.TraceService";
pub const LOGS_SERVICE_NAME: &str = "opentelemetry.proto.collector.logs.v1.LogsService";

/// Encoded `FileDescriptorSet` of the OTLP collector services.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("otlp_descriptor");
