//! Validate command implementation.

use std::path::PathBuf;

use basecat_core::BaseConfig;
use clap::Args;

use crate::output;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Catalogue document to validate (defaults to the active catalogue)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Validate the document named by `--file`.
pub fn run_file(args: &ValidateArgs) -> i32 {
    let Some(path) = &args.file else {
        return 1;
    };
    match BaseConfig::load(path) {
        Ok(config) => {
            output::success(&format!("{} is valid.", path.display()));
            report(&config);
            0
        }
        Err(e) => {
            output::error(&format!("{} is invalid: {}", path.display(), e));
            1
        }
    }
}

/// Validate the already loaded catalogue.
pub fn run(config: &BaseConfig) -> i32 {
    if let Err(e) = config.validate() {
        output::error(&format!("Catalogue is invalid: {}", e));
        return 1;
    }
    output::success("Catalogue is valid.");
    report(config);
    0
}

fn report(config: &BaseConfig) {
    let protocols = config.protocols.all_protocols();
    output::kv("Network", &format!("{} ({})", config.network.name, config.network.chain_id));
    output::kv("Protocols", &protocols.len().to_string());
    output::kv("Active", &config.protocols.active_protocols().len().to_string());

    for conflict in config.protocols.address_conflicts() {
        if conflict.is_placeholder() {
            output::warn(&format!(
                "Placeholder address shared by {}",
                conflict.keys.join(", ")
            ));
        }
    }
    for (key, table) in config.protocols.misplaced_entries() {
        output::warn(&format!("'{}' sits in the {} table", key, table));
    }
    for key in config.protocols.shadowed_keys() {
        output::warn(&format!("Key '{}' is overridden by a later table", key));
    }
}
