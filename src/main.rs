use anyhow::Result;
use campus_jobs::{logging, start_web_server, AppConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "campus-jobs")]
#[command(about = "REST backend for the campus recruitment and forum app")]
struct Cli {
    /// YAML configuration file with `local` and `production` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON document backing the API, overrides the configuration
    #[arg(short, long)]
    database: Option<PathBuf>,
}

#[rocket::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    logging::init_tracing(config.log_file.as_deref())?;

    info!(
        "Environment: {}",
        std::env::var("APP_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(&config).await
}
