//! # basecat core
//!
//! **Base network parameters and DeFi protocol catalogue**
//!
//! This crate holds the static configuration a Base-chain data service
//! starts from: the network descriptor, a registry of DeFi protocols split
//! into DEX / Lending / Yield / Bridge tables, and the third-party API
//! endpoints with their polling cadences. On top of the data it offers pure
//! lookups: merge, filter by category, filter by activity, find by address.
//!
//! ## Features
//!
//! - **No I/O in lookups**: every query is a synchronous read of immutable data
//! - **Explicit precedence**: tables merge in [`MERGE_ORDER`], later wins
//! - **Fixture-friendly**: build a [`BaseConfig`] from literals, tables or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use basecat_core::{BaseConfig, ProtocolCategory};
//!
//! let config = BaseConfig::base_mainnet().unwrap();
//! assert_eq!(config.network.chain_id, 8453);
//!
//! let dexes = config.protocols.protocols_by_category(ProtocolCategory::Dex);
//! assert_eq!(dexes.len(), 3);
//!
//! // Address lookup ignores case
//! let bridge = config
//!     .protocols
//!     .protocol_by_address("0x4200000000000000000000000000000000000010")
//!     .unwrap();
//! assert_eq!(bridge.name, "Base Bridge");
//! ```

pub mod api;
pub mod builtin;
pub mod catalogue;
pub mod config;
pub mod document;
pub mod error;
pub mod network;
pub mod protocol;
mod urls;

// Re-export main types for convenience
pub use api::{ApiConfig, ApiService, DataKind};
pub use catalogue::{
    AddressConflict, ProtocolCatalogue, ProtocolMap, ProtocolTable, TableKind, MERGE_ORDER,
};
pub use config::BaseConfig;
pub use error::{CatalogueError, Result};
pub use network::{NativeCurrency, NetworkConfig, BASE_MAINNET_CHAIN_ID};
pub use protocol::{address_matches, parse_address, ProtocolCategory, ProtocolConfig, ProtocolLiteral};
