//! content-hub server binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hub_axum::{ServerConfig, start_server};
use tracing_subscriber::EnvFilter;

/// Content hub admin API server.
#[derive(Debug, Parser)]
#[command(name = "content-hub", version, about)]
struct Cli {
    /// Port to listen on (overrides HUB_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Skip the startup sync for this run
    #[arg(long)]
    no_sync: bool,

    /// Directory served for unmatched paths (overrides HUB_STATIC_DIR)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if cli.no_sync {
        config = config.with_sync_on_startup(false);
    }
    if let Some(dir) = cli.static_dir {
        config = config.with_static_dir(dir);
    }

    start_server(config).await
}
