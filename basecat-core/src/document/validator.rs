use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{CatalogueError, Result};

/// JSON-Schema check for catalogue documents.
pub struct DocumentValidator {
    schema: JSONSchema,
}

impl DocumentValidator {
    pub fn new() -> Result<Self> {
        let schema_str = include_str!("schema.json");
        let schema_value: Value = serde_json::from_str(schema_str)
            .map_err(|e| CatalogueError::ConfigError(format!("Failed to parse internal schema: {}", e)))?;

        let schema = JSONSchema::compile(&schema_value)
            .map_err(|e| CatalogueError::ConfigError(format!("Failed to compile catalogue schema: {}", e)))?;

        Ok(Self { schema })
    }

    /// Validate `document`, reporting every violation at once.
    pub fn validate(&self, document: &Value) -> Result<()> {
        if let Err(errors) = self.schema.validate(document) {
            let messages: Vec<String> = errors
                .map(|e| format!("{} (at '{}')", e, e.instance_path))
                .collect();

            if !messages.is_empty() {
                return Err(CatalogueError::ConfigError(format!(
                    "Catalogue validation failed:\n  - {}",
                    messages.join("\n  - ")
                )));
            }
        }
        Ok(())
    }
}
