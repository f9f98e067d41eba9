use club_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first: .env, then logging
    dotenv::dotenv().ok();
    club_server::init_logger();

    tracing::info!("Club membership server starting...");

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await?;

    Server::with_state(config, state).run().await
}
