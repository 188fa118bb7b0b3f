//! URL well-formedness checks shared by the network, protocol and API tables.

use url::Url;

use crate::error::{CatalogueError, Result};

pub(crate) const HTTP_SCHEMES: &[&str] = &["http", "https"];
pub(crate) const WS_SCHEMES: &[&str] = &["ws", "wss"];

/// Parse `url` and require one of `schemes` and a host.
pub(crate) fn check_url(field: &str, url: &str, schemes: &[&str]) -> Result<Url> {
    let invalid = |reason: String| CatalogueError::InvalidUrl {
        field: field.to_string(),
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

    if !schemes.contains(&parsed.scheme()) {
        return Err(invalid(format!(
            "scheme '{}' not one of {}",
            parsed.scheme(),
            schemes.join("/")
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    Ok(parsed)
}
