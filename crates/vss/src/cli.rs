//! Command-line front end
//!
//! Argument definitions and command dispatch for the `vss` binary. Every
//! command writes its results to the given writer, one URL per line.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use vss_domain::constants::PASTE_DEFAULT_EXPIRATION;
use vss_domain::value_objects::{PasteExpiration, PastePrivacy, UploadRequest};
use vss_infrastructure::config::{AppConfig, ConfigLoader};
use vss_infrastructure::factory::ClientFactory;

/// Command line interface for Visual State Sharer
#[derive(Parser, Debug)]
#[command(name = "vss")]
#[command(about = "Share code on Pastebin and screenshots on Gyazo")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Share one source file as a paste
    PasteFile {
        /// File to share
        path: PathBuf,

        /// Visibility: public, unlisted, private (or 0, 1, 2)
        #[arg(short, long, default_value = "unlisted")]
        privacy: PastePrivacy,

        /// Lifetime token: N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y
        #[arg(short, long, default_value = PASTE_DEFAULT_EXPIRATION)]
        expiration: PasteExpiration,
    },

    /// Share every matching file under a directory
    PasteDir {
        /// Directory to scan recursively
        path: PathBuf,

        /// Extensions to include (repeatable or comma separated)
        #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
        extensions: Vec<String>,

        /// Visibility: public, unlisted, private (or 0, 1, 2)
        #[arg(short, long, default_value = "unlisted")]
        privacy: PastePrivacy,

        /// Lifetime token: N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y
        #[arg(short, long, default_value = PASTE_DEFAULT_EXPIRATION)]
        expiration: PasteExpiration,
    },

    /// Upload an image to Gyazo
    Upload {
        /// Image file to upload
        path: PathBuf,

        /// Image title
        #[arg(long)]
        title: Option<String>,

        /// Image description
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Upload a screenshot with a generated title
    Screenshot {
        /// Screenshot file to upload
        path: PathBuf,
    },

    /// Request a Gyazo access token with the configured client credentials
    Token,
}

/// Load configuration, from `path` when given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Run one command, writing its results to `out`
pub async fn execute<W: Write>(
    command: Command,
    factory: &ClientFactory,
    out: &mut W,
) -> anyhow::Result<()> {
    debug!(?command, "Executing command");

    match command {
        Command::PasteFile {
            path,
            privacy,
            expiration,
        } => {
            let paste = factory
                .pastebin()
                .share_file(&path, privacy, expiration)
                .await?;
            writeln!(out, "{}", paste.url)?;
        }
        Command::PasteDir {
            path,
            extensions,
            privacy,
            expiration,
        } => {
            let filter: Vec<&str> = extensions.iter().map(String::as_str).collect();
            let filter = (!filter.is_empty()).then_some(filter.as_slice());
            let pastes = factory
                .pastebin()
                .share_directory(&path, filter, privacy, expiration)
                .await?;
            for paste in pastes {
                writeln!(out, "{}", paste.url)?;
            }
        }
        Command::Upload {
            path,
            title,
            description,
        } => {
            let mut request = UploadRequest::new(path);
            if let Some(title) = title {
                request = request.with_title(title);
            }
            if let Some(description) = description {
                request = request.with_description(description);
            }
            let client = factory.gyazo_client_with_token().await?;
            let image = client.upload_image(&request).await?;
            writeln!(out, "{}", image.permalink_url)?;
        }
        Command::Screenshot { path } => {
            let client = factory.gyazo_client_with_token().await?;
            let image = client.share_screenshot(&path).await?;
            writeln!(out, "{}", image.permalink_url)?;
        }
        Command::Token => {
            let token = factory.fetch_access_token().await?;
            writeln!(out, "{token}")?;
        }
    }

    Ok(())
}
