//! eCloud command

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use crate::api::ApiClient;
use crate::cli::{require_args, show_each, Context, ListArgs, Shown};
use crate::config::Config;
use crate::helper::filtering_infer_operator;
use crate::output;
use crate::service::{ECloudService, Host, Site};

#[derive(Args, Debug)]
pub struct EcloudArgs {
    #[command(subcommand)]
    pub command: EcloudCommand,
}

#[derive(Subcommand, Debug)]
pub enum EcloudCommand {
    /// Dedicated hosts
    Host(HostArgs),

    /// Sites
    Site(SiteArgs),
}

#[derive(Args, Debug)]
pub struct HostArgs {
    #[command(subcommand)]
    pub command: HostCommand,
}

#[derive(Subcommand, Debug)]
pub enum HostCommand {
    /// List hosts
    List(ListArgs),

    /// Show one or more hosts
    Show {
        /// Host IDs
        #[arg(value_name = "HOST_ID")]
        ids: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub command: SiteCommand,
}

#[derive(Subcommand, Debug)]
pub enum SiteCommand {
    /// List sites
    List(SiteListArgs),

    /// Show one or more sites
    Show {
        /// Site IDs
        #[arg(value_name = "SITE_ID")]
        ids: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SiteListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Filter by state, e.g. Complete
    #[arg(long)]
    pub state: Option<String>,
}

pub async fn execute(config: &Config, ctx: &Context, args: EcloudArgs) -> Result<()> {
    let client = ApiClient::new(config.clone())?;

    match args.command {
        EcloudCommand::Host(HostArgs { command }) => match command {
            HostCommand::List(list) => {
                let hosts = host_list(&client, ctx, &list).await?;
                output::render(&hosts, ctx.format)
            }
            HostCommand::Show { ids } => {
                let shown = host_show(&client, &ids).await?;
                shown.report();
                output::render(&shown.items, ctx.format)
            }
        },

        EcloudCommand::Site(SiteArgs { command }) => match command {
            SiteCommand::List(list) => {
                let sites = site_list(&client, ctx, &list).await?;
                output::render(&sites, ctx.format)
            }
            SiteCommand::Show { ids } => {
                let shown = site_show(&client, &ids).await?;
                shown.report();
                output::render(&shown.items, ctx.format)
            }
        },
    }
}

pub async fn host_list<S: ECloudService>(
    service: &S,
    ctx: &Context,
    args: &ListArgs,
) -> Result<Vec<Host>> {
    let params = args.request_parameters(ctx.per_page)?;

    service
        .get_hosts(&params)
        .await
        .map_err(|e| anyhow!("Error retrieving hosts: {}", e))
}

pub async fn host_show<S: ECloudService>(service: &S, ids: &[String]) -> Result<Shown<Host>> {
    require_args(ids, "host")?;

    Ok(show_each(ids, "host", |id| service.get_host(id)).await)
}

pub async fn site_list<S: ECloudService>(
    service: &S,
    ctx: &Context,
    args: &SiteListArgs,
) -> Result<Vec<Site>> {
    let mut params = args.list.request_parameters(ctx.per_page)?;

    if let Some(ref state) = args.state {
        params.with_filter(filtering_infer_operator("state", state));
    }

    service
        .get_sites(&params)
        .await
        .map_err(|e| anyhow!("Error retrieving sites: {}", e))
}

pub async fn site_show<S: ECloudService>(service: &S, ids: &[String]) -> Result<Shown<Site>> {
    require_args(ids, "site")?;

    Ok(show_each(ids, "site", |id| service.get_site(id)).await)
}
