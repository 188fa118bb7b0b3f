//! Network command implementation.

use basecat_core::BaseConfig;

use crate::output;

/// Run the network command.
pub fn run(config: &BaseConfig) -> i32 {
    let network = &config.network;
    let currency = &network.native_currency;

    output::header(&format!("{} Network", network.name));
    output::kv("Chain ID", &network.chain_id.to_string());
    output::kv("RPC", &network.rpc_url);
    output::kv("WebSocket", &network.ws_url);
    output::kv("Explorer", &network.block_explorer);
    output::kv(
        "Native currency",
        &format!("{} ({}, {} decimals)", currency.name, currency.symbol, currency.decimals),
    );

    println!();
    output::hint("Use --config <PATH> to inspect a custom catalogue document.");

    0
}
