use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tenantry::{commands, config, logger};

#[derive(Parser)]
#[command(
    name = "tenantry",
    version,
    about = "Resolve and cache tenant branding themes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a tenant's theme from fixture rows and print it as JSON
    Resolve {
        /// Tenant rows fixture file (.json or .toml)
        #[arg(long)]
        file: PathBuf,
        /// Tenant id override (defaults to the id in the fixture)
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Normalize fixture rows into fully-defaulted tenant data
    Build {
        /// Tenant rows fixture file (.json or .toml)
        #[arg(long)]
        file: PathBuf,
    },
    /// Remove a tenant's cached theme entry
    Clear {
        /// Tenant id (defaults to the "default" entry)
        #[arg(long)]
        tenant: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Composition root: configuration and the store are constructed here and
    // handed down explicitly.
    let config = config::load_config()?;
    logger::setup_logger(&config)?;

    match &cli.command {
        Commands::Resolve { file, tenant } => {
            commands::resolve(&config, file, tenant.as_deref())?;
        }
        Commands::Build { file } => {
            commands::build(file)?;
        }
        Commands::Clear { tenant } => {
            commands::clear(&config, tenant.as_deref())?;
        }
    }

    Ok(())
}
