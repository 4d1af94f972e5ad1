//! Config command

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::Context;
use crate::config::{Config, OutputFormat};
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show config paths
    Paths,
}

pub async fn execute(config: &Config, ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            if ctx.format != OutputFormat::Table {
                return output::print_output(&redacted(config), ctx.format);
            }

            output::info("Current configuration:");

            if config.api_key.is_some() {
                println!("  Auth: API key (set)");
            } else {
                output::warning("  Auth: Not configured! Set UKF_API_KEY");
            }

            println!("  API URI: {}", config.api_uri);
            println!("  Timeout: {}s", config.api_timeout_seconds);
            if config.api_pagination_perpage > 0 {
                println!("  Page size: {}", config.api_pagination_perpage);
            } else {
                println!("  Page size: API default");
            }
            println!("  Output Format: {:?}", config.output_format);
        }

        ConfigCommand::Paths => {
            output::info("Configuration paths:");

            if let Ok(config_dir) = Config::config_dir() {
                println!("  Config directory: {}", config_dir.display());
            }

            println!("  Environment file: .env (current directory)");
        }
    }

    Ok(())
}

/// Configuration as JSON, with the API key masked
fn redacted(config: &Config) -> serde_json::Value {
    json!({
        "api_key": config.api_key.as_ref().map(|_| "********"),
        "api_uri": config.api_uri,
        "api_timeout_seconds": config.api_timeout_seconds,
        "api_pagination_perpage": config.api_pagination_perpage,
        "output_format": config.output_format,
    })
}
