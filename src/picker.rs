//! Node picker state.
//!
//! Models the sidebar node selector: the search box, the category tabs and
//! the pin toggle. Every read of [`NodePicker::sections`] runs a fresh
//! search; nothing is cached.

use std::sync::Arc;

use node_search::matching::search::run_search;
use node_search::{Catalog, CatalogItem, Category, Query, ResultSections, SearchOptions};

use crate::config::SearchConfig;
use crate::error::{FlowError, Result};

/// State of the node picker sidebar.
#[derive(Debug, Clone)]
pub struct NodePicker {
    catalog: Arc<Catalog>,
    options: SearchOptions,
    query: String,
    selected_category: Category,
    pinned: bool,
}

impl NodePicker {
    /// Create a picker over `catalog`, opened on the configured default tab.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Config`] if the search settings are invalid.
    pub fn new(catalog: Arc<Catalog>, config: &SearchConfig) -> Result<Self> {
        let options = config.to_options();
        options
            .validate()
            .map_err(|e| FlowError::Config(e.to_string()))?;
        Ok(Self {
            catalog,
            options,
            query: String::new(),
            selected_category: config.default_category,
            pinned: false,
        })
    }

    /// Replace the search box text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Empty the search box, returning to browse mode.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Switch the active category tab.
    ///
    /// The tab is remembered while searching and applies again once the
    /// query is cleared.
    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Toggle whether the picker stays expanded. Returns the new state.
    pub fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }

    /// Whether the picker is pinned open.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// The active category tab.
    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    /// `true` when the search box holds non-blank text.
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// The picker is expanded while pinned or searching.
    pub fn is_expanded(&self) -> bool {
        self.pinned || self.is_searching()
    }

    /// Category tabs are hidden while searching, since results span all tabs.
    pub fn shows_category_tabs(&self) -> bool {
        !self.is_searching()
    }

    /// The engine query for the current state.
    pub fn query(&self) -> Query {
        Query::new(self.query.clone(), self.selected_category)
    }

    /// Current result sections.
    pub fn sections(&self) -> ResultSections {
        run_search(&self.catalog, &self.query(), &self.options)
    }

    /// Pick a node by id.
    ///
    /// Clears the search box on success so the next open starts in browse
    /// mode. Unknown ids leave the state untouched.
    pub fn select(&mut self, id: &str) -> Option<&CatalogItem> {
        let item = self.catalog.get(id)?;
        tracing::debug!(id, category = %item.category, "node selected");
        self.query.clear();
        Some(item)
    }
}
