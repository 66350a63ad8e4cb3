use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use imgurappist::api::{AppState, create_router};
use imgurappist::config::Config;
use imgurappist::imgur::Client;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Drops a sprite on a random Imgur picture of any place")]
struct Cli {
    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Directory served under /assets, overrides ASSETS_DIR
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Also picks up records from the log crate
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(assets_dir) = cli.assets_dir {
        config.assets_dir = assets_dir;
    }

    let imgur = Client::new(None, &config.imgur_client_id, &config.imgur_client_secret)
        .with_base_url(&config.imgur_base_url)?;
    let state = Arc::new(AppState { imgur });
    let app = create_router(state, &config.assets_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
