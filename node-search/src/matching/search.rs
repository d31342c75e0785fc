//! The search pipeline: filter, dedup, group, cap.
//!
//! Pure and synchronous. Every call is a function of the catalog, the query
//! and the options; nothing is cached between calls.

use crate::catalog::Catalog;
use crate::config::SearchOptions;
use crate::types::{Query, ResultSections};

use super::filter::filter_nodes;
use super::grouping::group;

/// Run a query against the catalog and return display sections.
///
/// # Pipeline
///
/// 1. Keep items passing the category rules and the match predicate
/// 2. When searching, collapse `(name, parent group)` duplicates
/// 3. Group into sections (by section when browsing, tiered when searching)
/// 4. Truncate each section to `options.max_results_per_section`
pub fn run_search(catalog: &Catalog, query: &Query, options: &SearchOptions) -> ResultSections {
    let searching = query.is_searching();
    let filtered = filter_nodes(catalog.items(), query, options);
    tracing::trace!(
        query = %query.text,
        category = %query.selected_category,
        matched = filtered.len(),
        "filtered catalog"
    );

    let mut sections = group(&filtered, searching, &query.text);
    if let Some(max) = options.max_results_per_section {
        sections.truncate_sections(max);
    }

    tracing::debug!(
        searching,
        sections = sections.len(),
        items = sections.item_count(),
        "grouped search results"
    );
    sections
}
