//! The match predicate: does an item belong in the results for a query?
//!
//! Checks, in order:
//! 1. Name contains the full query
//! 2. Keywords: full-query substring, then per-word rules
//! 3. Synonym tables, for general (non product-name) queries only

use crate::types::CatalogItem;

use super::semantic::{self, EMAIL, TABLES};

/// Returns `true` if `item` matches `query`, with the synonym fallback on.
///
/// Blank queries match everything. Matching is case-insensitive.
pub fn matches(item: &CatalogItem, query: &str) -> bool {
    matches_with(item, query, true)
}

/// [`matches`] with the synonym fallback switchable.
pub fn matches_with(item: &CatalogItem, query: &str, semantic_fallback: bool) -> bool {
    let lower_query = query.trim().to_lowercase();
    if lower_query.is_empty() {
        return true;
    }
    let lower_name = item.name.to_lowercase();
    let words: Vec<&str> = lower_query.split_whitespace().collect();

    if lower_name.contains(&lower_query) {
        return true;
    }

    let lower_keywords = item.lower_keywords();
    if !lower_keywords.is_empty() {
        if lower_keywords.iter().any(|k| k.contains(&lower_query)) {
            return true;
        }
        if words.len() > 1 {
            if words.iter().all(|word| word_matches_keywords(word, &lower_keywords)) {
                return true;
            }
        } else if single_word_matches_keywords(words[0], &lower_keywords) {
            return true;
        }
    }

    if !semantic_fallback || semantic::is_specific_app_name(&lower_query, &words) {
        return false;
    }

    for table in TABLES {
        if !table.fires(&words) {
            continue;
        }
        // Items with keywords must mention email themselves to be routed here.
        if table.name == EMAIL.name
            && !lower_keywords.is_empty()
            && !semantic::has_email_keyword(&lower_keywords)
        {
            return false;
        }
        if table.allows(&lower_name) {
            tracing::trace!(table = table.name, item = %item.id, "synonym match");
            return true;
        }
    }
    false
}

/// Per-word rule for multi-word queries.
///
/// Words of up to two characters need a keyword equal to or starting with
/// them. Longer words match on substring in either direction, which covers
/// simple plurals ("emails" vs "email").
pub(crate) fn word_matches_keywords(word: &str, lower_keywords: &[String]) -> bool {
    if word.chars().count() <= 2 {
        return lower_keywords.iter().any(|k| k.starts_with(word));
    }
    lower_keywords
        .iter()
        .any(|k| k.contains(word) || word.contains(k.as_str()))
}

/// Single-word rule for words of three or more characters: a prefix in
/// either direction, so "gmailer" still finds the "gmail" keyword.
fn single_word_matches_keywords(word: &str, lower_keywords: &[String]) -> bool {
    if word.chars().count() < 3 {
        return false;
    }
    lower_keywords
        .iter()
        .any(|k| k.starts_with(word) || word.starts_with(k.as_str()))
}
