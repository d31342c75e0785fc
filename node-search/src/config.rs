//! Search options with sensible defaults.
//!
//! [`SearchOptions`] toggles the synonym fallback and caps section sizes.
//! The defaults reproduce the picker's stock behaviour.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Options for a catalog search.
///
/// Use [`Default::default()`] for the stock behaviour, or construct with
/// field overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Whether general queries ("email", "web search") may match items through
    /// the fixed synonym tables.
    pub semantic_fallback: bool,
    /// Maximum items kept per section after ordering. `None` keeps all.
    pub max_results_per_section: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            semantic_fallback: true,
            max_results_per_section: None,
        }
    }
}

impl SearchOptions {
    /// Validates these options, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results_per_section`, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results_per_section == Some(0) {
            return Err(SearchError::Config(
                "max_results_per_section must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_fallback_without_cap() {
        let options = SearchOptions::default();
        assert!(options.semantic_fallback);
        assert!(options.max_results_per_section.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_section_cap_rejected() {
        let options = SearchOptions {
            max_results_per_section: Some(0),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("max_results_per_section"));
    }

    #[test]
    fn positive_section_cap_valid() {
        let options = SearchOptions {
            max_results_per_section: Some(5),
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"semantic_fallback": false}"#).expect("deserialize");
        assert!(!options.semantic_fallback);
        assert!(options.max_results_per_section.is_none());
    }
}
