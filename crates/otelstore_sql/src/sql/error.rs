use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlError {
    #[error(transparent)]
    SqlxError(#[from] SqlxError),

    #[error("Failed to run migrations: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to connect to database: {0}")]
    ConnectionError(#[source] SqlxError),
}

impl SqlError {
    fn database_error_kind(&self) -> Option<ErrorKind> {
        match self {
            SqlError::SqlxError(SqlxError::Database(db_err)) => Some(db_err.kind()),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::UniqueViolation))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self.database_error_kind(),
            Some(ErrorKind::ForeignKeyViolation)
        )
    }

    /// Storage could not be reached. Callers may retry later.
    pub fn is_unavailable(&self) -> bool {
        match self {
            SqlError::ConnectionError(_) => true,
            SqlError::SqlxError(err) => matches!(
                err,
                SqlxError::PoolTimedOut
                    | SqlxError::PoolClosed
                    | SqlxError::Io(_)
                    | SqlxError::Tls(_)
                    | SqlxError::WorkerCrashed
            ),
            SqlError::MigrateError(_) => false,
        }
    }
}
