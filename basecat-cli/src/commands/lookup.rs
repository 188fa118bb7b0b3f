//! Lookup command implementation.

use basecat_core::{parse_address, BaseConfig};
use clap::Args;

use crate::output::{self, Column};

const MATCH_COLUMNS: [Column; 3] = [
    Column { title: "Key", width: 12 },
    Column { title: "Name", width: 20 },
    Column { title: "Category", width: 0 },
];

/// Arguments for the lookup command.
#[derive(Args)]
pub struct LookupArgs {
    /// Contract address (any case; `0x` prefix optional, whitespace ignored)
    pub address: String,

    /// Show every protocol sharing the address, not just the first
    #[arg(long)]
    pub all: bool,
}

/// Run the lookup command.
pub fn run(config: &BaseConfig, args: LookupArgs) -> i32 {
    let address = match parse_address("lookup", &args.address) {
        Ok(a) => a,
        Err(_) => {
            output::error(&format!("Invalid address: {}", args.address));
            return 1;
        }
    };
    let catalogue = &config.protocols;

    if args.all {
        let matches = catalogue.find_all_by_address(&address);
        if matches.is_empty() {
            output::error(&format!("No protocol registered at {}", args.address));
            return 1;
        }
        output::header(&format!("Protocols at {}", args.address.trim()));
        output::table_header(&MATCH_COLUMNS);
        for (key, protocol) in matches.iter() {
            output::table_row(&MATCH_COLUMNS, key, &[&protocol.name, &protocol.category]);
        }
        if matches.len() > 1 {
            println!();
            output::warn("Address is shared; plain lookup returns the first entry.");
        }
        return 0;
    }

    let Some(protocol) = catalogue.find_by_address(&address) else {
        output::error(&format!("No protocol registered at {}", args.address));
        return 1;
    };

    output::header(&protocol.name);
    output::kv("Category", protocol.category.as_str());
    output::kv("Address", &protocol.checksum_address());
    output::kv("Active", if protocol.is_active { "yes" } else { "no" });
    output::kv("Launched", &protocol.launch_date.to_string());
    if let Some(url) = &protocol.tvl_endpoint {
        output::kv("TVL endpoint", url);
    }
    if let Some(url) = &protocol.subgraph_url {
        output::kv("Subgraph", url);
    }
    if protocol.has_placeholder_address() {
        output::warn("Placeholder address; other protocols may share it (use --all).");
    } else {
        output::kv("Explorer", &config.network.address_url(&address));
    }

    0
}
