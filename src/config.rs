//! Configuration for the flowcanvas node picker and search tooling.

use std::path::{Path, PathBuf};

use node_search::{Category, SearchOptions};
use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Node catalog location.
    pub catalog: CatalogConfig,
    /// Search behaviour of the node picker.
    pub search: SearchConfig,
}

/// Node catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the nodes document (None = `config_dir()/nodes.json`).
    pub path: Option<PathBuf>,
}

/// Node picker search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Tab selected when the picker opens.
    pub default_category: Category,
    /// Enable synonym matching for broad queries like "email" or "docs".
    pub semantic_fallback: bool,
    /// Cap on items per result section (None = unlimited).
    pub max_results_per_section: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Popular,
            semantic_fallback: true,
            max_results_per_section: None,
        }
    }
}

impl SearchConfig {
    /// Engine options for these settings.
    #[must_use]
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            semantic_fallback: self.semantic_fallback,
            max_results_per_section: self.max_results_per_section,
        }
    }
}

impl FlowConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds invalid values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| FlowError::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from `path` if it exists, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Same as [`FlowConfig::from_file`] when the file exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FlowError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        self.search
            .to_options()
            .validate()
            .map_err(|e| FlowError::Config(format!("[search] {e}")))?;
        if let Some(path) = &self.catalog.path {
            if path.as_os_str().is_empty() {
                return Err(FlowError::Config("[catalog] path must not be empty".into()));
            }
        }
        Ok(())
    }
}
