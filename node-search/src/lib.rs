//! # node-search
//!
//! Search over the flowcanvas node catalog.
//!
//! Given a static catalog of node definitions, a query string and the
//! selected category tab, produce ranked, deduplicated, sectioned results
//! for the node picker.
//!
//! ## Design
//!
//! - The catalog is loaded once from a JSON nodes document and never mutated
//! - Browsing (blank query) lists one category tab, grouped by section
//! - Searching spans all tabs: a match predicate filters, an additive score
//!   ranks, duplicates collapse, and results are laid out in fixed tiers
//! - Knowledge base sources always come last while searching
//! - Pure and synchronous: no I/O, no shared state, safe to call from any
//!   thread
//!
//! Query text is logged only at trace level.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod types;

pub use catalog::{Catalog, NodesDocument};
pub use config::SearchOptions;
pub use error::{Result, SearchError};
pub use matching::predicate::matches;
pub use matching::scoring::score;
pub use types::{CatalogItem, Category, Query, ResultSections, ScoredItem};

/// Search the catalog.
///
/// Validates `options`, then filters, deduplicates and groups the catalog
/// for `query`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `options` are invalid. The search
/// itself cannot fail.
///
/// # Examples
///
/// ```
/// # fn example() -> node_search::Result<()> {
/// use node_search::{Catalog, Category, Query, SearchOptions};
///
/// let catalog = Catalog::from_json_str(r#"{"Apps": [{"name": "Gmail", "keywords": ["email"]}]}"#)?;
/// let query = Query::new("gmail", Category::Popular);
/// let sections = node_search::search(&catalog, &query, &SearchOptions::default())?;
/// for (label, items) in sections.iter() {
///     for item in items {
///         println!("{label}: {}", item.name);
///     }
/// }
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn search(catalog: &Catalog, query: &Query, options: &SearchOptions) -> Result<ResultSections> {
    options.validate()?;
    Ok(matching::search::run_search(catalog, query, options))
}

/// Search the catalog with default options.
///
/// Convenience wrapper around [`search`] using [`SearchOptions::default()`],
/// which are always valid.
pub fn search_default(catalog: &Catalog, query: &Query) -> ResultSections {
    matching::search::run_search(catalog, query, &SearchOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_validates_options() {
        let options = SearchOptions {
            max_results_per_section: Some(0),
            ..Default::default()
        };
        let result = search(&Catalog::empty(), &Query::default(), &options);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_results_per_section"));
    }

    #[test]
    fn search_default_matches_search_with_defaults() {
        let catalog = Catalog::from_json_str(r#"{"Apps": ["Gmail", "Slack"]}"#).expect("parse");
        let query = Query::new("gm", Category::Apps);
        let via_search = search(&catalog, &query, &SearchOptions::default()).expect("valid");
        assert_eq!(via_search, search_default(&catalog, &query));
    }

    #[test]
    fn catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
        assert_send_sync::<ResultSections>();
    }
}
