use otelstore_sql::SqlError;
use otelstore_types::RecordError;
use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    RecordError(#[from] RecordError),

    #[error(transparent)]
    SqlError(#[from] SqlError),
}

impl From<ServerError> for Status {
    fn from(err: ServerError) -> Self {
        match &err {
            ServerError::RecordError(_) => Status::invalid_argument(err.to_string()),
            ServerError::SqlError(e) if e.is_unique_violation() => {
                Status::already_exists(format!("Duplicate record: {err}"))
            }
            ServerError::SqlError(e) if e.is_foreign_key_violation() => {
                Status::failed_precondition(format!("Missing referenced record: {err}"))
            }
            ServerError::SqlError(e) if e.is_unavailable() => {
                Status::unavailable(format!("Storage unavailable: {err}"))
            }
            ServerError::SqlError(_) => Status::internal(format!("Failed to store records: {err}")),
        }
    }
}
