//! Error types for the basecat core library.
//!
//! Lookups never fail; these errors come from building a catalogue
//! (literals or JSON documents), validating it, and building endpoint URLs.

use thiserror::Error;

use crate::catalogue::TableKind;

/// Errors that can occur in catalogue construction and validation.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Contract address is not a 20-byte hex string.
    #[error("Invalid address for '{key}': {value}")]
    InvalidAddress {
        /// Protocol key (or input label) the address belongs to
        key: String,
        /// The rejected input
        value: String,
    },

    /// Launch date is not an ISO calendar date.
    #[error("Invalid launch date for '{key}': {value}")]
    InvalidDate {
        /// Protocol key the date belongs to
        key: String,
        /// The rejected input
        value: String,
    },

    /// Malformed or wrong-scheme URL.
    #[error("Invalid URL in {field}: '{url}' ({reason})")]
    InvalidUrl {
        /// Field that carried the URL
        field: String,
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Chain identifiers must be positive.
    #[error("Invalid chain id: {0}")]
    InvalidChainId(u64),

    /// Several protocols declare the same non-placeholder address.
    #[error("Address {address} is shared by protocols: {}", .keys.join(", "))]
    DuplicateAddress {
        /// Checksummed address
        address: String,
        /// Conflicting keys, in merge order
        keys: Vec<String>,
    },

    /// A key appears twice in one source table.
    #[error("Duplicate protocol key '{key}' in {table} table")]
    DuplicateKey {
        /// The repeated key
        key: String,
        /// Table holding the duplicate
        table: TableKind,
    },

    /// Category name outside {DEX, Lending, Yield, Bridge, Derivatives}.
    #[error("Unknown protocol category: {0}")]
    UnknownCategory(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration document or persistence error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;
