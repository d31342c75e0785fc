//! Error types for the flowcanvas application layer.

use node_search::SearchError;

/// Top-level error type for flowcanvas.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Catalog construction or parsing error.
    #[error("catalog error: {0}")]
    Catalog(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, FlowError>;
