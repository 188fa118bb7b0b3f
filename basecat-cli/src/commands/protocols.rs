//! Protocols command implementation.

use basecat_core::{BaseConfig, ProtocolCategory};
use clap::Args;
use colored::Colorize;

use crate::output::{self, Column};

const COLUMNS: [Column; 6] = [
    Column { title: "Key", width: 12 },
    Column { title: "Name", width: 20 },
    Column { title: "Category", width: 11 },
    Column { title: "Address", width: 42 },
    Column { title: "Status", width: 8 },
    Column { title: "Launched", width: 0 },
];

/// Arguments for the protocols command.
#[derive(Args)]
pub struct ProtocolsArgs {
    /// Only show one category (DEX, Lending, Yield, Bridge, Derivatives)
    #[arg(short, long)]
    pub category: Option<ProtocolCategory>,

    /// Only show active protocols
    #[arg(short, long)]
    pub active: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the protocols command.
pub fn run(config: &BaseConfig, args: ProtocolsArgs) -> i32 {
    let catalogue = &config.protocols;

    let mut protocols = match args.category {
        Some(category) => catalogue.protocols_by_category(category),
        None => catalogue.all_protocols(),
    };
    if args.active {
        protocols = protocols.filter(|p| p.is_active);
    }

    if args.json {
        return match serde_json::to_string_pretty(&protocols) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                output::error(&format!("Failed to serialize protocols: {}", e));
                1
            }
        };
    }

    let title = match args.category {
        Some(category) => format!("{} Protocols", category),
        None => "Protocols".to_string(),
    };
    output::header(&title);

    if protocols.is_empty() {
        output::info("No protocols match.");
        return 0;
    }

    output::table_header(&COLUMNS);
    for (key, protocol) in protocols.iter() {
        let status = if protocol.is_active {
            "active".green()
        } else {
            "inactive".dimmed()
        };
        output::table_row(
            &COLUMNS,
            key,
            &[
                &protocol.name,
                &protocol.category.as_str(),
                &protocol.checksum_address(),
                &status,
                &protocol.launch_date,
            ],
        );
    }

    println!();
    output::info(&format!("{} protocol(s)", protocols.len()));

    0
}
