//! Error types for the node-search crate.
//!
//! Searching itself never fails; only catalog construction, parsing and
//! option validation produce errors.

/// Errors that can occur while building a catalog or configuring a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Two catalog items share the same id.
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),

    /// The nodes document could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A category name did not match any known tab.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid search options.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for node-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
