use directory_server::{AppState, Config, Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Set up environment (dotenv, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("Staff Directory Server starting...");

    // 2. Load configuration
    let config = Config::from_env()?;

    // 3. Initialize server state (pool, migrations, JWT service)
    let state = AppState::new(config.clone()).await?;

    // 4. Start the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
