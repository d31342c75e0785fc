//! Additive relevance scoring for matched items.
//!
//! Every satisfied band adds its points; bands stack. Scores rank items
//! but never filter them.
//!
//! | Condition | Points |
//! |---|---|
//! | name equals query | 1000 |
//! | else name starts with query | 500 |
//! | else name contains query | 200 |
//! | a keyword equals query | 800 |
//! | a keyword starts with query | 400 |
//! | a keyword contains query | 300 |
//! | every query word matches a keyword | 250 |
//! | some query word and keyword overlap | 100 |

use crate::types::{CatalogItem, ScoredItem};

use super::predicate::word_matches_keywords;

/// Name equals the query.
pub const NAME_EXACT: u32 = 1000;
/// Name starts with the query.
pub const NAME_PREFIX: u32 = 500;
/// Name contains the query.
pub const NAME_CONTAINS: u32 = 200;
/// A keyword equals the query.
pub const KEYWORD_EXACT: u32 = 800;
/// A keyword starts with the query.
pub const KEYWORD_PREFIX: u32 = 400;
/// A keyword contains the query.
pub const KEYWORD_CONTAINS: u32 = 300;
/// Every query word matches some keyword.
pub const ALL_WORDS: u32 = 250;
/// At least one query word contains, or is contained in, some keyword.
pub const SOME_WORD: u32 = 100;

/// Score `item` against `query`. Blank queries score 0.
pub fn score(item: &CatalogItem, query: &str) -> u32 {
    let lower_query = query.trim().to_lowercase();
    if lower_query.is_empty() {
        return 0;
    }
    let lower_name = item.name.to_lowercase();
    let mut total = 0;

    if lower_name == lower_query {
        total += NAME_EXACT;
    } else if lower_name.starts_with(&lower_query) {
        total += NAME_PREFIX;
    } else if lower_name.contains(&lower_query) {
        total += NAME_CONTAINS;
    }

    let lower_keywords = item.lower_keywords();
    if lower_keywords.is_empty() {
        return total;
    }

    if lower_keywords.iter().any(|k| *k == lower_query) {
        total += KEYWORD_EXACT;
    }
    if lower_keywords.iter().any(|k| k.starts_with(&lower_query)) {
        total += KEYWORD_PREFIX;
    }
    if lower_keywords.iter().any(|k| k.contains(&lower_query)) {
        total += KEYWORD_CONTAINS;
    }

    let words: Vec<&str> = lower_query.split_whitespace().collect();
    if words
        .iter()
        .all(|word| word_matches_keywords(word, &lower_keywords))
    {
        total += ALL_WORDS;
    }
    if words
        .iter()
        .any(|word| {
            lower_keywords
                .iter()
                .any(|k| k.contains(word) || word.contains(k.as_str()))
        })
    {
        total += SOME_WORD;
    }

    total
}

/// Score a list of items, preserving order.
pub fn score_items<'a>(items: &[&'a CatalogItem], query: &str) -> Vec<ScoredItem<'a>> {
    items
        .iter()
        .map(|&item| ScoredItem {
            item,
            score: score(item, query),
        })
        .collect()
}

/// Stable sort by score, highest first. Ties keep their current order.
pub fn sort_by_score(scored: &mut [ScoredItem<'_>]) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn make_item(name: &str, keywords: &[&str]) -> CatalogItem {
        CatalogItem {
            id: format!("app-{}", name.to_lowercase()),
            name: name.into(),
            category: Category::Apps,
            section: None,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            parent_group: Some("Apps".into()),
        }
    }

    #[test]
    fn blank_query_scores_zero() {
        let item = make_item("Gmail", &["gmail"]);
        assert_eq!(score(&item, ""), 0);
        assert_eq!(score(&item, "  "), 0);
    }

    #[test]
    fn name_bands_are_exclusive() {
        assert_eq!(score(&make_item("Gmail", &[]), "gmail"), NAME_EXACT);
        assert_eq!(score(&make_item("Gmail", &[]), "gm"), NAME_PREFIX);
        assert_eq!(score(&make_item("Gmail", &[]), "mai"), NAME_CONTAINS);
        assert_eq!(score(&make_item("Gmail", &[]), "slack"), 0);
    }

    #[test]
    fn keyword_bands_stack() {
        // exact 800 + prefix 400 + contains 300 + all words 250 + some word 100
        let item = make_item("Google Mail", &["email"]);
        assert_eq!(score(&item, "email"), 1850);
    }

    #[test]
    fn name_and_keyword_bands_stack() {
        // name exact 1000 + keyword bands 1850
        let item = make_item("Gmail", &["gmail"]);
        assert_eq!(score(&item, "GMAIL"), 2850);
    }

    #[test]
    fn exact_name_outranks_keyword_only_match() {
        let named = make_item("Gmail", &[]);
        let keyword_only = make_item("Inbox", &["gmail"]);
        assert!(score(&named, "gmail") >= NAME_EXACT);
        assert!(score(&make_item("Gmail", &["gmail"]), "gmail") > score(&keyword_only, "gmail"));
    }

    #[test]
    fn multi_word_query_bands() {
        let item = make_item("Outlook", &["email", "calendar"]);
        // words both match: all 250 + some 100
        assert_eq!(score(&item, "emails calendar"), ALL_WORDS + SOME_WORD);
        // one word matches: "calendar" inside "calendar" -> some 100 only
        assert_eq!(score(&item, "team calendar"), SOME_WORD);
    }

    #[test]
    fn plural_word_overlaps_in_both_word_bands() {
        // "emails" contains the "email" keyword; no full-query keyword band fires.
        let item = make_item("Outlook", &["email"]);
        assert_eq!(score(&item, "emails"), ALL_WORDS + SOME_WORD);
    }

    #[test]
    fn score_items_preserves_order_and_sort_is_stable() {
        let a = make_item("Slack", &[]);
        let b = make_item("Slack Bot", &[]);
        let c = make_item("Slacker", &[]);
        let items = vec![&a, &b, &c];
        let mut scored = score_items(&items, "slack");
        assert_eq!(scored[0].score, NAME_EXACT);
        assert_eq!(scored[1].score, NAME_PREFIX);
        assert_eq!(scored[2].score, NAME_PREFIX);

        scored.reverse();
        sort_by_score(&mut scored);
        let names: Vec<&str> = scored.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["Slack", "Slacker", "Slack Bot"]);
    }
}
