//! Surfs Up API Server
//!
//! Run with: cargo run --bin surfsup
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the default locations)
//! with environment overrides:
//! - `SURFSUP_DATABASE`: SQLite file (default: Resources/hawaii.sqlite)
//! - `SURFSUP_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `SURFSUP_API_PORT`: Port to listen on (default: 5000)
//! - `SURFSUP_LOG_LEVEL` / `SURFSUP_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Full tracing filter, overrides the level

use clap::Parser;
use std::path::PathBuf;
use surfsup::api::{serve, AppState};
use surfsup::config::Config;
use surfsup::store::WeatherStore;

#[derive(Parser)]
#[command(name = "surfsup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only climate API over daily station observations")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database, overrides the config file
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(database) = args.database {
        config.store.database_path = database;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    surfsup::logging::init(&config.logging);

    tracing::info!("Starting Surfs Up API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {:?}", config.store.database_path);

    let store = WeatherStore::new(&config.store.database_path);

    // Fail fast on a missing file or unexpected schema
    store.run(|session| session.verify_schema()).await?;
    tracing::info!("Store schema verified");

    let state = AppState::new(store, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Surfs Up API server stopped");
    Ok(())
}
