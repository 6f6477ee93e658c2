//! Parlor Games - casual game session server.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use parlor_games::{
    AppState, Cli, Command, GameService, NewsClient, NewsConfig, ServerConfig, SessionSeeder,
    SessionStore, router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            config,
            session_capacity,
        } => serve(host, port, config, session_capacity).await,
    }
}

/// Run the HTTP game server
async fn serve(
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
    session_capacity: Option<usize>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_env()
    .override_host(host)
    .override_port(port)
    .override_session_capacity(session_capacity);

    info!(host = %config.host(), port = *config.port(), "starting parlor games server");

    let store = Arc::new(SessionStore::new(
        *config.session_capacity(),
        SessionSeeder::from_entropy(),
    ));
    let news = Arc::new(NewsClient::new(NewsConfig::new(
        config.news_api_key().clone(),
    )));
    let app = router(AppState {
        service: GameService::new(store),
        news,
    });

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "server ready at http://{}:{}/",
        config.host(),
        config.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
