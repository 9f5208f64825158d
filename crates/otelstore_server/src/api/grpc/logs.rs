use crate::api::error::ServerError;
use crate::api::state::AppState;
use otelstore_tonic::{
    ExportLogsServiceRequest, ExportLogsServiceResponse, LogsService, LogsServiceServer,
};
use otelstore_types::LogServerRecord;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, error, instrument};

#[derive(Clone)]
pub struct LogsGrpcService {
    state: Arc<AppState>,
}

impl LogsGrpcService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn into_server(self) -> LogsServiceServer<Self> {
        LogsServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl LogsService for LogsGrpcService {
    #[instrument(skip_all)]
    async fn export(
        &self,
        request: Request<ExportLogsServiceRequest>,
    ) -> Result<Response<ExportLogsServiceResponse>, Status> {
        let records = LogServerRecord::new(request.into_inner())
            .to_records()
            .map_err(|e| {
                error!(error = %e, "Rejected malformed log export");
                ServerError::from(e)
            })?;

        self.state
            .writer
            .write_logs(&records.logs)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store logs");
                ServerError::from(e)
            })?;

        // logs without trace context are dropped by policy, never reported
        debug!(
            logs = records.logs.len(),
            dropped = records.dropped,
            "Stored log export"
        );

        Ok(Response::new(ExportLogsServiceResponse {
            partial_success: None,
        }))
    }
}
