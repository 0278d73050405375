//! Portfolio backend binary.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use portfolio_backend::config::{load_config, PortfolioConfig};
use portfolio_backend::http::HttpServer;
use portfolio_backend::lifecycle::Shutdown;
use portfolio_backend::observability::{logging, metrics};
use portfolio_backend::store::load_document;

#[derive(Parser)]
#[command(name = "portfolio-backend", version, about = "Personal portfolio API server")]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PortfolioConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        document = %config.document.path.display(),
        "Configuration loaded"
    );

    // Fail fast: no listener is bound until the document is complete.
    let store = load_document(&config.document.path)?;
    tracing::info!("Portfolio document loaded");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, store)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
