//! roster HTTP server
//!
//! Binds the CRUD router to a TCP port. Storage is in-memory unless a
//! store path is given, in which case both collections persist to one flat
//! JSON document.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use roster_core::{AppState, ServerConfig, StorageConfig};

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "CRUD HTTP service for entity and hobby collections")]
struct Args {
    /// Server port
    #[arg(short, long, env = "PORT", default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Path to the JSON store document; omit for in-memory storage
    #[arg(short, long, env = "STORE_PATH")]
    store: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            storage: match self.store {
                Some(path) => StorageConfig::Durable(path),
                None => StorageConfig::Volatile,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = Args::parse().into_config();
    match &config.storage {
        StorageConfig::Volatile => info!("using volatile in-memory storage"),
        StorageConfig::Durable(path) => info!(path = %path.display(), "using durable storage"),
    }

    let state = AppState::from_config(&config).await?;
    let app = roster_core::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
