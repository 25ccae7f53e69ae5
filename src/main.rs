// Entry point for the catalog-squarer CLI.
// The library in lib.rs holds everything except argument parsing and logging setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use catalog_squarer_lib::commands::{InspectArgs, RunArgs, inspect_image, run_batch};

#[derive(Debug, Parser)]
#[command(name = "catalog-squarer", version, about = "Square and rename catalog photos for e-commerce")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Square every image under SOURCE into OUTPUT
    Run(RunArgs),
    /// Show how one image would be squared
    Inspect(InspectArgs),
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let config = args.resolve_config().context("invalid configuration")?;
            init_logging(Some(&config.log_file_or_default()))?;

            info!("=== Catalog squarer starting ===");
            let summary = run_batch(&config)?;
            info!(
                "=== Done: {}/{} images squared ===",
                summary.processed_count(),
                summary.total
            );
        }
        Command::Inspect(args) => {
            init_logging(None)?;
            println!("{}", inspect_image(&args)?);
        }
    }

    Ok(())
}
