use meetcross_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    setup_environment();

    tracing::info!("Meetcross server starting...");

    // 2. Configuration - missing API key or JWT secret stops here,
    //    before any data call
    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, port = config.http_port, "Configuration loaded");

    // 3. Server state (database, JWT, session manager)
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
