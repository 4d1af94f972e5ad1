//! ukfast - command-line client for the UKFast cloud infrastructure API

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ukfast_cli::cli::{self, Cli, Commands, Context};
use ukfast_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let format = cli.format.as_deref();

    // Execute command
    match cli.command {
        Commands::Account(args) => {
            let (config, ctx) = load(format, true)?;
            cli::account::execute(&config, &ctx, args).await
        }
        Commands::Ecloud(args) => {
            let (config, ctx) = load(format, true)?;
            cli::ecloud::execute(&config, &ctx, args).await
        }
        Commands::Ddosx(args) => {
            let (config, _) = load(format, true)?;
            cli::ddosx::execute(&config, args).await
        }
        Commands::Config(args) => {
            let (config, ctx) = load(format, false)?;
            cli::config_cmd::execute(&config, &ctx, args).await
        }
    }
}

/// Load configuration; config commands work without credentials
fn load(format: Option<&str>, require_auth: bool) -> Result<(Config, Context)> {
    let config = if require_auth {
        Config::load()?
    } else {
        Config::load_optional()
    };
    let ctx = Context::new(&config, format)?;

    Ok((config, ctx))
}
