//! Catalog matching: predicate, scoring, filtering, dedup and grouping.
//!
//! This module decides which catalog items match a query, ranks them with
//! an additive score, removes search-mode duplicates, and lays the survivors
//! out in ordered sections for display.

pub mod dedup;
pub mod filter;
pub mod grouping;
pub mod predicate;
pub mod scoring;
pub mod search;
pub mod semantic;
