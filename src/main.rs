//! Coffee SNOB server
//!
//! Serves the compiled frontend and the read-only shop API.
//!
//! Run with: cargo run --bin coffee-snob -- --static-dir ui/dist

use clap::Parser;
use std::path::PathBuf;

use coffee_snob::api::{serve, AppState};
use coffee_snob::config::Config;
use coffee_snob::shops::ShopCatalog;

#[derive(Parser)]
#[command(name = "coffee-snob")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Coffee SNOB web app")]
struct Args {
    /// Config file (default: ~/.config/coffee-snob/config.toml or ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with the built frontend
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config =
        coffee_snob::logging::during_startup(|| Config::load_default(args.config.as_deref()))?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }

    coffee_snob::logging::init(&config.logging);

    tracing::info!("Starting Coffee SNOB v{}", env!("CARGO_PKG_VERSION"));

    let catalog = ShopCatalog::bundled()?;
    tracing::info!("Loaded {} shops", catalog.len());
    tracing::info!("Static directory: {:?}", config.server.static_dir);

    serve(AppState::new(catalog, config.server)).await?;

    Ok(())
}
