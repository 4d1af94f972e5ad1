//! DDoSX command

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use crate::api::ApiClient;
use crate::cli::{require_args, Shown};
use crate::config::Config;
use crate::output;
use crate::service::DDoSXService;

#[derive(Args, Debug)]
pub struct DdosxArgs {
    #[command(subcommand)]
    pub command: DdosxCommand,
}

#[derive(Subcommand, Debug)]
pub enum DdosxCommand {
    /// Domains
    Domain(DomainArgs),
}

#[derive(Args, Debug)]
pub struct DomainArgs {
    #[command(subcommand)]
    pub command: DomainCommand,
}

#[derive(Subcommand, Debug)]
pub enum DomainCommand {
    /// Domain verification
    Verification(VerificationArgs),
}

#[derive(Args, Debug)]
pub struct VerificationArgs {
    #[command(subcommand)]
    pub command: VerificationCommand,
}

#[derive(Subcommand, Debug)]
pub enum VerificationCommand {
    /// Verification via DNS record
    Dns {
        #[command(subcommand)]
        command: DnsVerificationCommand,
    },

    /// Verification via uploaded file
    #[command(name = "fileupload")]
    FileUpload {
        #[command(subcommand)]
        command: FileUploadVerificationCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum DnsVerificationCommand {
    /// Verify one or more domains via DNS
    Verify {
        /// Domain names
        #[arg(value_name = "DOMAIN")]
        domains: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FileUploadVerificationCommand {
    /// Verify one or more domains via file upload
    Verify {
        /// Domain names
        #[arg(value_name = "DOMAIN")]
        domains: Vec<String>,
    },

    /// Download the verification file for a domain
    Download {
        /// Domain name
        #[arg(value_name = "DOMAIN")]
        domain: Option<String>,

        /// Directory to write the file to
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}

/// How a domain is proven to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod {
    Dns,
    FileUpload,
}

pub async fn execute(config: &Config, args: DdosxArgs) -> Result<()> {
    let client = ApiClient::new(config.clone())?;

    let DdosxCommand::Domain(DomainArgs {
        command: DomainCommand::Verification(VerificationArgs { command }),
    }) = args.command;

    match command {
        VerificationCommand::Dns {
            command: DnsVerificationCommand::Verify { domains },
        } => report_verified(verify(&client, VerificationMethod::Dns, &domains).await?),

        VerificationCommand::FileUpload { command } => match command {
            FileUploadVerificationCommand::Verify { domains } => report_verified(
                verify(&client, VerificationMethod::FileUpload, &domains).await?,
            ),
            FileUploadVerificationCommand::Download { domain, path } => {
                let written = download(&client, domain.as_deref(), &path).await?;
                output::success(&format!("Verification file written to {}", written.display()));
            }
        },
    }

    Ok(())
}

fn report_verified(shown: Shown<String>) {
    shown.report();
    for domain in &shown.items {
        output::success(&format!("Verified domain {}", domain));
    }
}

/// Verify each domain in turn, recording failures and carrying on
pub async fn verify<S: DDoSXService>(
    service: &S,
    method: VerificationMethod,
    domains: &[String],
) -> Result<Shown<String>> {
    require_args(domains, "domain")?;

    let mut shown = Shown::default();
    for domain in domains {
        let result = match method {
            VerificationMethod::Dns => service.verify_domain_dns(domain).await,
            VerificationMethod::FileUpload => service.verify_domain_file_upload(domain).await,
        };

        match result {
            Ok(()) => shown.items.push(domain.clone()),
            Err(e) => shown
                .errors
                .push(format!("Error verifying domain [{}]: {}", domain, e)),
        }
    }

    Ok(shown)
}

/// Write the domain's verification file into `dir`, returning the file path
pub async fn download<S: DDoSXService>(
    service: &S,
    domain: Option<&str>,
    dir: &Path,
) -> Result<PathBuf> {
    let domain = domain.ok_or_else(|| anyhow::anyhow!("Missing domain"))?;

    let file = service
        .download_domain_verification_file(domain)
        .await
        .map_err(|e| anyhow::anyhow!("Error downloading verification file: {}", e))?;

    let target = dir.join(local_filename(&file.filename, domain));
    tokio::fs::write(&target, file.content)
        .await
        .with_context(|| format!("Error writing verification file {}", target.display()))?;

    Ok(target)
}

/// Last path component of the suggested name, or `<domain>.txt` when it has none
fn local_filename(suggested: &str, domain: &str) -> String {
    let last = |name: &str| {
        Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
    };

    last(suggested)
        .or_else(|| last(&format!("{}.txt", domain)))
        .unwrap_or_else(|| "verification.txt".to_string())
}
