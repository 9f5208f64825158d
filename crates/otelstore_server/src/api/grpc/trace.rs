use crate::api::error::ServerError;
use crate::api::state::AppState;
use otelstore_tonic::{
    ExportTraceServiceRequest, ExportTraceServiceResponse, TraceService, TraceServiceServer,
};
use otelstore_types::TraceServerRecord;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, error, instrument};

#[derive(Clone)]
pub struct TraceGrpcService {
    state: Arc<AppState>,
}

impl TraceGrpcService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn into_server(self) -> TraceServiceServer<Self> {
        TraceServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl TraceService for TraceGrpcService {
    #[instrument(skip_all)]
    async fn export(
        &self,
        request: Request<ExportTraceServiceRequest>,
    ) -> Result<Response<ExportTraceServiceResponse>, Status> {
        let (spans, events) = TraceServerRecord::new(request.into_inner())
            .to_records()
            .map_err(|e| {
                error!(error = %e, "Rejected malformed trace export");
                ServerError::from(e)
            })?;

        self.state
            .writer
            .write_spans(&spans, &events)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store spans");
                ServerError::from(e)
            })?;

        debug!(spans = spans.len(), events = events.len(), "Stored trace export");

        Ok(Response::new(ExportTraceServiceResponse {
            partial_success: None,
        }))
    }
}
