//! CLI commands module

pub mod account;
pub mod config_cmd;
pub mod ddosx;
pub mod ecloud;

use std::future::Future;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use crate::api::RequestParameters;
use crate::config::{Config, OutputFormat};
use crate::errors::InvalidFlagValue;
use crate::helper;
use crate::output;

/// UKFast - command-line client for the UKFast APIs
#[derive(Parser, Debug)]
#[command(name = "ukfast")]
#[command(version)]
#[command(about = "Command-line client for the UKFast cloud infrastructure API", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: table, json, compact
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account invoices
    Account(account::AccountArgs),

    /// eCloud hosts and sites
    Ecloud(ecloud::EcloudArgs),

    /// DDoSX domain verification
    Ddosx(ddosx::DdosxArgs),

    /// Configuration management
    Config(config_cmd::ConfigArgs),
}

/// Filtering and sorting flags accepted by every list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter results, e.g. name:lk=web*, id=1,2,3 (repeatable)
    #[arg(long, value_name = "PROPERTY[:OPERATOR]=VALUE")]
    pub filter: Vec<String>,

    /// Sort results, e.g. name or name:desc
    #[arg(long, value_name = "PROPERTY[:DIRECTION]")]
    pub sort: Option<String>,
}

impl ListArgs {
    pub fn request_parameters(&self, per_page: u32) -> Result<RequestParameters, InvalidFlagValue> {
        let sort = self.sort.as_deref().unwrap_or_default();
        helper::request_parameters(self.filter.as_slice(), sort, per_page)
    }
}

/// Per-invocation settings threaded into every handler
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub format: OutputFormat,
    pub per_page: u32,
}

impl Context {
    pub fn new(config: &Config, format_override: Option<&str>) -> Result<Self> {
        let format = match format_override {
            Some(f) => f.parse()?,
            None => config.output_format,
        };

        Ok(Self {
            format,
            per_page: config.api_pagination_perpage,
        })
    }
}

/// Results of a multi-argument command: what succeeded and what was reported
#[derive(Debug)]
pub struct Shown<T> {
    pub items: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> Default for Shown<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> Shown<T> {
    /// Print collected per-item errors to stderr
    pub fn report(&self) {
        for err in &self.errors {
            output::error(err);
        }
    }
}

/// Fails with `Missing <resource>` when no positional argument was given
pub fn require_args(args: &[String], resource: &str) -> Result<()> {
    if args.is_empty() {
        return Err(anyhow!("Missing {}", resource));
    }
    Ok(())
}

/// Fetch each numeric ID in turn, recording failures and carrying on
pub async fn show_each<T, F, Fut>(args: &[String], resource: &str, fetch: F) -> Shown<T>
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut shown = Shown::default();

    for arg in args {
        let Ok(id) = arg.parse::<i64>() else {
            shown
                .errors
                .push(format!("Invalid {} ID [{}]", resource, arg));
            continue;
        };

        match fetch(id).await {
            Ok(item) => shown.items.push(item),
            Err(e) => shown
                .errors
                .push(format!("Error retrieving {} [{}]: {}", resource, arg, e)),
        }
    }

    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Operator;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn cli_parses_repeated_filters() {
        let cli = Cli::try_parse_from([
            "ukfast", "ecloud", "host", "list", "--filter", "name=web*", "--filter", "id=1,2",
            "--sort", "name:desc",
        ])
        .unwrap();

        let Commands::Ecloud(ecloud::EcloudArgs {
            command: ecloud::EcloudCommand::Host(ecloud::HostArgs {
                command: ecloud::HostCommand::List(list),
            }),
        }) = cli.command
        else {
            panic!("unexpected command");
        };

        let params = list.request_parameters(10).unwrap();
        assert_eq!(params.filtering.len(), 2);
        assert_eq!(params.filtering[0].operator, Operator::Lk);
        assert_eq!(params.filtering[1].operator, Operator::In);
        assert!(params.sorting.descending);
        assert_eq!(params.pagination.per_page, 10);
    }

    #[test]
    fn list_args_without_flags_is_default() {
        let params = ListArgs::default().request_parameters(0).unwrap();

        assert_eq!(params, RequestParameters::default());
    }

    #[test]
    fn context_format_override() {
        let config = Config::default();

        assert_eq!(Context::new(&config, None).unwrap().format, OutputFormat::Table);
        assert_eq!(
            Context::new(&config, Some("json")).unwrap().format,
            OutputFormat::Json
        );
        assert!(Context::new(&config, Some("yaml")).is_err());
    }

    #[test]
    fn require_args_names_resource() {
        let err = require_args(&[], "invoice").unwrap_err();

        assert_eq!(err.to_string(), "Missing invoice");
        assert!(require_args(&args(&["1"]), "invoice").is_ok());
    }

    #[tokio::test]
    async fn show_each_continues_past_failures() {
        let shown = show_each(&args(&["1", "abc", "2", "3"]), "widget", |id| async move {
            if id == 2 {
                Err(anyhow!("test error"))
            } else {
                Ok(id * 10)
            }
        })
        .await;

        assert_eq!(shown.items, vec![10, 30]);
        assert_eq!(
            shown.errors,
            vec![
                "Invalid widget ID [abc]".to_string(),
                "Error retrieving widget [2]: test error".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn show_each_accepts_ids_beyond_32_bits() {
        let shown = show_each(&args(&["3000000000"]), "widget", |id| async move { Ok(id) }).await;

        assert_eq!(shown.items, vec![3_000_000_000]);
        assert!(shown.errors.is_empty());
    }
}
