//! basecat CLI
//!
//! Terminal interface for the Base network and DeFi protocol catalogue.

mod commands;
mod output;

use std::path::PathBuf;

use basecat_core::BaseConfig;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basecat")]
#[command(author = "LogicCrafter")]
#[command(version = "0.1.0")]
#[command(about = "basecat - Base network and DeFi protocol catalogue", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Catalogue document to use instead of the built-in Base mainnet data
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the network descriptor
    Network,

    /// List protocols from the merged catalogue
    Protocols(commands::protocols::ProtocolsArgs),

    /// Find the protocol registered at an address
    Lookup(commands::lookup::LookupArgs),

    /// Show third-party API endpoints and refresh intervals
    Api,

    /// Validate the built-in catalogue or a catalogue document
    Validate(commands::validate::ValidateArgs),

    /// Write the catalogue as a JSON document
    Export(commands::export::ExportArgs),
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<BaseConfig, String> {
    match path {
        Some(path) => {
            debug!("Using catalogue document {}", path.display());
            BaseConfig::load(path)
                .map_err(|e| format!("Failed to load catalogue {}: {}", path.display(), e))
        }
        None => {
            debug!("Using built-in Base mainnet catalogue");
            BaseConfig::base_mainnet()
                .map_err(|e| format!("Failed to build built-in catalogue: {}", e))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    // `validate --file` loads its own document so errors are reported there.
    if let Commands::Validate(args) = &cli.command {
        if args.file.is_some() {
            std::process::exit(commands::validate::run_file(args));
        }
    }

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&e);
            std::process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Commands::Network => commands::network::run(&config),
        Commands::Protocols(args) => commands::protocols::run(&config, args),
        Commands::Lookup(args) => commands::lookup::run(&config, args),
        Commands::Api => commands::api::run(&config),
        Commands::Validate(_) => commands::validate::run(&config),
        Commands::Export(args) => commands::export::run(&config, args),
    };

    std::process::exit(exit_code);
}
