pub mod api;

use crate::api::grpc::start_grpc_server;
use crate::api::setup::setup_components;
use crate::api::state::AppState;
use std::sync::Arc;

/// Start the ingestion server and close the database pool once it stops.
pub async fn start_server() -> Result<(), anyhow::Error> {
    let (config, db_client) = setup_components().await?;

    let state = Arc::new(AppState::new(Arc::new(db_client.clone()), config));

    let result = start_grpc_server(state).await;

    db_client.close().await;

    result
}
