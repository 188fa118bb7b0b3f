use serde_json::Value;

use crate::error::{CatalogueError, Result};

/// Version written by this crate.
pub const CURRENT_VERSION: &str = "1.0";

/// Bring a raw catalogue document to [`CURRENT_VERSION`].
///
/// Documents without a version predate versioning and share the 1.0 layout.
pub fn migrate_document(data: &mut Value) -> Result<()> {
    let Some(object) = data.as_object_mut() else {
        return Err(CatalogueError::ConfigError(
            "Catalogue document must be a JSON object".to_string(),
        ));
    };

    let version = match object.get("version") {
        None => CURRENT_VERSION.to_string(),
        Some(Value::String(v)) => v.clone(),
        Some(other) => {
            return Err(CatalogueError::ConfigError(format!(
                "Catalogue version must be a string, got {other}"
            )))
        }
    };

    match version.as_str() {
        CURRENT_VERSION => {
            object.insert("version".to_string(), Value::String(version));
            Ok(())
        }
        _ => Err(CatalogueError::ConfigError(format!(
            "Unsupported catalogue version: {version}"
        ))),
    }
}
