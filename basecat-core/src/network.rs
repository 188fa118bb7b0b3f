//! Network descriptor for the Base chain.

use ethers_core::types::Address;
use ethers_core::utils::to_checksum;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};
use crate::urls::{check_url, HTTP_SCHEMES, WS_SCHEMES};

/// Canonical chain id of Base mainnet.
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

/// Native gas currency of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    /// Decimal precision of the smallest unit
    pub decimals: u8,
}

/// Connection parameters for one EVM network.
///
/// These are inputs for an RPC client; nothing here opens a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub ws_url: String,
    pub block_explorer: String,
    pub native_currency: NativeCurrency,
}

impl NetworkConfig {
    /// Base mainnet with the public Coinbase endpoints.
    pub fn base_mainnet() -> Self {
        Self {
            chain_id: BASE_MAINNET_CHAIN_ID,
            name: "Base".to_string(),
            rpc_url: "https://mainnet.base.org".to_string(),
            ws_url: "wss://mainnet.base.org".to_string(),
            block_explorer: "https://basescan.org".to_string(),
            native_currency: NativeCurrency {
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }

    /// Check the chain id and that every URL is well-formed.
    pub fn validate(&self) -> Result<()> {
        if self.chain_id == 0 {
            return Err(CatalogueError::InvalidChainId(self.chain_id));
        }
        check_url("rpcUrl", &self.rpc_url, HTTP_SCHEMES)?;
        check_url("wsUrl", &self.ws_url, WS_SCHEMES)?;
        check_url("blockExplorer", &self.block_explorer, HTTP_SCHEMES)?;
        Ok(())
    }

    /// Explorer page for a contract or account.
    pub fn address_url(&self, address: &Address) -> String {
        format!(
            "{}/address/{}",
            self.block_explorer.trim_end_matches('/'),
            to_checksum(address, None)
        )
    }
}
