//! Account command

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use crate::api::ApiClient;
use crate::cli::{require_args, show_each, Context, ListArgs, Shown};
use crate::config::Config;
use crate::output;
use crate::service::{AccountService, Invoice};

#[derive(Args, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Invoices
    Invoice(InvoiceArgs),
}

#[derive(Args, Debug)]
pub struct InvoiceArgs {
    #[command(subcommand)]
    pub command: InvoiceCommand,
}

#[derive(Subcommand, Debug)]
pub enum InvoiceCommand {
    /// List invoices
    List(ListArgs),

    /// Show one or more invoices
    Show {
        /// Invoice IDs
        #[arg(value_name = "INVOICE_ID")]
        ids: Vec<String>,
    },
}

pub async fn execute(config: &Config, ctx: &Context, args: AccountArgs) -> Result<()> {
    let client = ApiClient::new(config.clone())?;

    match args.command {
        AccountCommand::Invoice(InvoiceArgs { command }) => match command {
            InvoiceCommand::List(list) => {
                let invoices = invoice_list(&client, ctx, &list).await?;
                output::render(&invoices, ctx.format)
            }
            InvoiceCommand::Show { ids } => {
                let shown = invoice_show(&client, &ids).await?;
                shown.report();
                output::render(&shown.items, ctx.format)
            }
        },
    }
}

pub async fn invoice_list<S: AccountService>(
    service: &S,
    ctx: &Context,
    args: &ListArgs,
) -> Result<Vec<Invoice>> {
    let params = args.request_parameters(ctx.per_page)?;

    service
        .get_invoices(&params)
        .await
        .map_err(|e| anyhow!("Error retrieving invoices: {}", e))
}

pub async fn invoice_show<S: AccountService>(service: &S, ids: &[String]) -> Result<Shown<Invoice>> {
    require_args(ids, "invoice")?;

    Ok(show_each(ids, "invoice", |id| service.get_invoice(id)).await)
}
