//! Flowcanvas: visual workflow builder, node picker layer.
//!
//! Wires the [`node_search`] engine into the application:
//! - **Config**: TOML settings for the catalog location and search behaviour
//! - **Catalog**: loads the JSON nodes document once and shares it via `Arc`
//! - **Picker**: sidebar state (search box, category tabs, pin) that turns
//!   user input into queries and result sections

pub mod catalog;
pub mod config;
pub mod dirs;
pub mod error;
pub mod picker;

pub use catalog::{catalog_path, load_catalog};
pub use config::{CatalogConfig, FlowConfig, SearchConfig};
pub use error::{FlowError, Result};
pub use picker::NodePicker;
