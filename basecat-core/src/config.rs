//! The complete configuration bundle: network, protocols and API table.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::api::ApiConfig;
use crate::catalogue::ProtocolCatalogue;
use crate::document::{self, migration::CURRENT_VERSION};
use crate::error::Result;
use crate::network::NetworkConfig;

/// Everything a consumer needs, constructed once and passed explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseConfig {
    /// Document format version
    pub version: String,
    pub network: NetworkConfig,
    pub protocols: ProtocolCatalogue,
    pub api: ApiConfig,
}

impl BaseConfig {
    /// Built-in Base mainnet configuration.
    pub fn base_mainnet() -> Result<Self> {
        Ok(Self {
            version: CURRENT_VERSION.to_string(),
            network: NetworkConfig::base_mainnet(),
            protocols: ProtocolCatalogue::builtin()?,
            api: ApiConfig::base_defaults(),
        })
    }

    /// Validate network, protocols and API settings.
    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.protocols.validate()?;
        self.api.validate()
    }

    /// Parse a catalogue document (see [`crate::document`]).
    pub fn from_json_str(content: &str) -> Result<Self> {
        document::parse_document(content)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        document::render_document(self)
    }

    /// Load and validate a catalogue document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        document::load_document(path.as_ref())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        document::save_document(self, path.as_ref())
    }
}
