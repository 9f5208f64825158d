use mimalloc::MiMalloc;
use otelstore_server::start_server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    start_server().await
}
