//! varbind CLI
//!
//! Runs the variable linking plugin against JSON document files:
//! - `link`: bind matching literals in the selection to the saved collection
//! - `settings`: show the collection picker
//! - `set-collection`: save the collection to link against
//! - `collections`: list every collection the document can use

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use varbind_engine::LinkStrategy;

use crate::commands::LinkRequest;
use crate::config::VarbindConfig;

/// Link layout literals to design-token variables
#[derive(Parser, Debug)]
#[command(name = "varbind")]
#[command(about = "Link layout literals to design-token variables")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./varbind.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Link the selection to the saved collection
    Link {
        /// Document file
        document: PathBuf,

        /// Collection token to save and link against
        #[arg(long)]
        collection: Option<String>,

        /// Matching strategy (overrides the config)
        #[arg(long)]
        strategy: Option<LinkStrategy>,

        /// Write a JSON link report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Do not write the document back
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the collection picker
    Settings {
        /// Document file
        document: PathBuf,
    },

    /// Save the collection to link against
    SetCollection {
        /// Document file
        document: PathBuf,

        /// Collection token, as listed by `varbind collections`
        token: String,
    },

    /// List available collections
    Collections {
        /// Document file
        document: PathBuf,
    },
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = VarbindConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log.filter);
    debug!("Effective config:\n{}", config.to_toml()?);

    let mut plugin_config = config.plugin_config();

    match cli.command {
        Commands::Link {
            document,
            collection,
            strategy,
            report,
            dry_run,
        } => {
            if let Some(strategy) = strategy {
                plugin_config.strategy = strategy;
            }
            info!("Linking {} ({} strategy)", document.display(), plugin_config.strategy);
            let request = LinkRequest {
                collection: collection.as_deref(),
                report: report.as_deref(),
                dry_run,
            };
            commands::link(&document, request, plugin_config).await?;
        }
        Commands::Settings { document } => {
            commands::settings(&document, plugin_config).await?;
        }
        Commands::SetCollection { document, token } => {
            commands::set_collection(&document, &token, plugin_config).await?;
        }
        Commands::Collections { document } => {
            commands::collections(&document).await?;
        }
    }

    Ok(())
}
