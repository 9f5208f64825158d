use crate::sql::error::SqlError;
use crate::sql::traits::{LogSqlLogic, TraceSqlLogic};
use otelstore_settings::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::{debug, error, info, instrument};

#[derive(Debug, Clone)]
pub struct PostgresClient {
    pub pool: Pool<Postgres>,
}

impl TraceSqlLogic for PostgresClient {}
impl LogSqlLogic for PostgresClient {}

impl PostgresClient {
    /// Create a new PostgresClient and bring the schema up to date
    ///
    /// # Arguments
    ///
    /// * `pool` - An optional database pool. A new pool is created from
    ///   `database_settings` when `None`
    ///
    /// # Returns
    ///
    /// * `Result<Self, SqlError>` - The connected client
    pub async fn new(
        pool: Option<Pool<Postgres>>,
        database_settings: &DatabaseSettings,
    ) -> Result<Self, SqlError> {
        let pool = match pool {
            Some(pool) => pool,
            None => Self::create_db_pool(database_settings).await?,
        };

        let client = Self { pool };
        client.run_migrations().await?;

        Ok(client)
    }

    /// Connect a pool sized and timed from the database settings.
    #[instrument(skip(database_settings))]
    pub async fn create_db_pool(
        database_settings: &DatabaseSettings,
    ) -> Result<Pool<Postgres>, SqlError> {
        let pool = PgPoolOptions::new()
            .max_connections(database_settings.max_connections)
            .acquire_timeout(database_settings.acquire_timeout)
            .connect(&database_settings.connection_uri)
            .await
            .map_err(|e| {
                error!("🚨 Failed to connect to database {:?}", e);
                SqlError::ConnectionError(e)
            })?;

        info!("✅ Successfully connected to database");
        Ok(pool)
    }

    async fn run_migrations(&self) -> Result<(), SqlError> {
        info!("Running migrations");
        sqlx::migrate!("src/migrations").run(&self.pool).await?;

        debug!("Migrations complete");

        Ok(())
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
