//! Sweetshop CLI - browse the dessert catalog from the terminal.
//!
//! Commands:
//! - `sweetshop list` - Query a page of products
//! - `sweetshop catalog` - Summarise the catalog and its facets

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sweetshop_observability::{init_logging, LogFormat, LogLevel};

use commands::{CatalogArgs, ListArgs};

/// Sweetshop CLI - Browse and query the dessert catalog
#[derive(Parser)]
#[command(name = "sweetshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query a page of products
    List(ListArgs),

    /// Show catalog size and facet counts
    Catalog(CatalogArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging;
    if cli.verbose && logging.level > LogLevel::Debug {
        logging = logging.with_level(LogLevel::Debug);
    }
    if cli.json {
        logging = logging.with_format(LogFormat::Json);
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
