use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use recipe_cost_engine::api::{AppState, create_router};
use recipe_cost_engine::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "recipe-cost-engine", about = "Recipe cost and menu pricing service")]
struct Cli {
    /// Configuration profile directory holding engine.yaml and units.yaml.
    #[arg(long, default_value = "./config/cafe")]
    config: PathBuf,
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recipe_cost_engine=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    info!(
        config = %cli.config.display(),
        conversions = config.conversions().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    info!(addr = %cli.bind, "Recipe cost engine listening");

    axum::serve(listener, router).await.context("serving HTTP")?;
    Ok(())
}
