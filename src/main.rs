mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "haven failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    let state = state::AppState::from_config(&config)?;
    let app = routes::app(state)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "haven listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
