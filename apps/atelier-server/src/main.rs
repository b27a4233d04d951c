#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod db;
mod logging;
mod request_id;
mod server;
mod signals;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use users::Users;

use crate::config::{AppConfig, CliArgs};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Atelier Server - user lookup API for the Atelier design platform
#[derive(Parser)]
#[command(name = "atelier-server")]
#[command(about = "Atelier Server - user lookup API for the Atelier design platform")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    let args = CliArgs {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // 1) defaults -> 2) YAML (if provided) -> 3) env (ATELIER__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args)?;

    logging::init_logging(&config.logging)?;

    tracing::info!("Atelier Server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = db::connect(&config.database).await?;

    if config.database.auto_migrate {
        Users::migrate(&db)
            .await
            .context("failed to run users migrations")?;
    } else {
        tracing::warn!("Automatic migrations disabled; assuming schema is current");
    }

    let users = Users::from_connection(db.clone());
    let router = server::build_router(&config.server, &users);

    let result = server::serve(&config.server, router).await;

    if let Err(e) = db.close().await {
        tracing::warn!(error = %e, "Failed to close database pool cleanly");
    }
    tracing::info!("Atelier Server stopped");

    result
}
