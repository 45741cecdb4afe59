use cineworld_server::logging::setup_logging;
use cineworld_server::{serve, ServerConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_logging();

    let config = ServerConfig::from_env();
    serve(config).await
}
