//! Export command implementation.

use std::path::PathBuf;

use basecat_core::BaseConfig;
use clap::Args;

use crate::output;

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the export command.
pub fn run(config: &BaseConfig, args: ExportArgs) -> i32 {
    match args.output {
        Some(path) => {
            if let Err(e) = config.save(&path) {
                output::error(&format!("Failed to export catalogue: {}", e));
                return 1;
            }
            output::success(&format!("Catalogue written to {}.", path.display()));
        }
        None => match config.to_json_string_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                output::error(&format!("Failed to export catalogue: {}", e));
                return 1;
            }
        },
    }
    0
}
