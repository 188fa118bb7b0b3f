//! Catalogue documents: versioned JSON files holding a full [`BaseConfig`].
//!
//! Loading runs four steps: version migration, JSON-Schema validation,
//! typed deserialization and semantic validation
//! ([`BaseConfig::validate`]). Protocol tables keep document order.

pub mod migration;
pub mod validator;

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::BaseConfig;
use crate::error::{CatalogueError, Result};
use migration::migrate_document;
use validator::DocumentValidator;

/// Parse and fully validate a catalogue document.
pub fn parse_document(content: &str) -> Result<BaseConfig> {
    let mut json_data: Value = serde_json::from_str(content)
        .map_err(|e| CatalogueError::ConfigError(format!("Failed to parse catalogue JSON: {}", e)))?;

    // 1. Migrate if necessary
    migrate_document(&mut json_data)?;

    // 2. Validate against schema
    let validator = DocumentValidator::new()?;
    validator.validate(&json_data)?;

    // 3. Deserialize into typed structure
    let config: BaseConfig = serde_json::from_value(json_data)
        .map_err(|e| CatalogueError::Serialization(format!("Failed to deserialize catalogue: {}", e)))?;

    // 4. Cross-field checks the schema cannot express
    config.validate()?;

    debug!(
        "Loaded catalogue for {} (chain {}) with {} protocols",
        config.network.name,
        config.network.chain_id,
        config.protocols.all_protocols().len()
    );
    Ok(config)
}

/// Pretty-printed document for `config`.
pub fn render_document(config: &BaseConfig) -> Result<String> {
    serde_json::to_string_pretty(config)
        .map_err(|e| CatalogueError::Serialization(format!("Failed to serialize catalogue: {}", e)))
}

/// Read and validate the document at `path`.
pub fn load_document(path: &Path) -> Result<BaseConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CatalogueError::ConfigError(format!("Failed to read catalogue {}: {}", path.display(), e))
    })?;
    parse_document(&content)
}

/// Write `config` to `path`, creating parent directories.
pub fn save_document(config: &BaseConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CatalogueError::ConfigError(format!("Failed to create directory: {}", e)))?;
    }

    let content = render_document(config)?;
    fs::write(path, content).map_err(|e| {
        CatalogueError::ConfigError(format!("Failed to write catalogue {}: {}", path.display(), e))
    })
}
