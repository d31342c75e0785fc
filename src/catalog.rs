//! Node catalog bootstrap.
//!
//! The catalog is read from a JSON nodes document once per process and then
//! shared read-only behind an [`Arc`].

use std::path::PathBuf;
use std::sync::Arc;

use node_search::Catalog;

use crate::config::CatalogConfig;
use crate::error::Result;

/// Resolve the nodes document path for `config`.
///
/// Falls back to `config_dir()/nodes.json` when no path is configured.
#[must_use]
pub fn catalog_path(config: &CatalogConfig) -> PathBuf {
    config.path.clone().unwrap_or_else(crate::dirs::nodes_file)
}

/// Read and parse the nodes document configured in `config`.
///
/// # Errors
///
/// Returns [`FlowError::Io`](crate::error::FlowError::Io) if the file
/// cannot be read, or [`FlowError::Catalog`](crate::error::FlowError::Catalog)
/// if it is not a valid nodes document.
pub fn load_catalog(config: &CatalogConfig) -> Result<Arc<Catalog>> {
    let path = catalog_path(config);
    let json = std::fs::read_to_string(&path)?;
    let catalog = Catalog::from_json_str(&json)?;
    tracing::info!(path = %path.display(), items = catalog.len(), "loaded node catalog");
    Ok(Arc::new(catalog))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::error::FlowError;

    #[test]
    fn configured_path_wins() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("/srv/flowcanvas/nodes.json")),
        };
        assert_eq!(catalog_path(&config), PathBuf::from("/srv/flowcanvas/nodes.json"));
    }

    #[test]
    fn default_path_is_nodes_json() {
        let path = catalog_path(&CatalogConfig::default());
        assert!(path.to_string_lossy().ends_with("nodes.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("/nonexistent/flowcanvas/nodes.json")),
        };
        assert!(matches!(load_catalog(&config), Err(FlowError::Io(_))));
    }

    #[test]
    fn invalid_document_is_catalog_error() {
        let dir = std::env::temp_dir().join("flowcanvas-test-catalog-invalid");
        let path = dir.join("nodes.json");
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(&path, "[1, 2, 3").ok();

        let config = CatalogConfig { path: Some(path) };
        assert!(matches!(load_catalog(&config), Err(FlowError::Catalog(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
