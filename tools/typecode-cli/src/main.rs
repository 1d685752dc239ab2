//! Typecode CLI - render raw values from type descriptors
//!
//! # Commands
//!
//! - `typecode render` - Render hex bytes as the value a descriptor names
//! - `typecode catalog` - List the descriptor rules in matching order
//! - `typecode config` - Show the config file location and effective settings
//!
//! # Usage
//!
//! ```bash
//! # Four-character code
//! typecode render I 44434241
//!
//! # C string resolved through a memory image mapped at 0x1000
//! typecode render '*' 0010000000000000 --base 0x1000 --memory 68690000
//! ```

mod catalog;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Typecode CLI - render raw values from type descriptors
#[derive(Parser)]
#[command(name = "typecode")]
#[command(about = "Render raw values from type descriptors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render hex bytes as the value a descriptor names
    Render(render::RenderArgs),

    /// List the descriptor rules in matching order
    Catalog,

    /// Show the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render::execute(args),
        Commands::Catalog => {
            catalog::execute();
            Ok(())
        }
        Commands::Config => config::execute(),
    }
}
