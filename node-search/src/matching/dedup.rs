//! Search-mode deduplication by `(name, parent group)`.
//!
//! The same node can be listed under several tabs. While searching, copies
//! that share both name and parent group collapse into one, keeping the copy
//! whose category has the lowest [`Category::priority`]. Copies from
//! different parent groups are distinct entries and are all kept.
//!
//! [`Category::priority`]: crate::types::Category::priority

use std::collections::HashMap;

use crate::types::CatalogItem;

/// Deduplicate `items` when `is_searching`; browse lists pass through.
///
/// The surviving copy takes the position of the first occurrence, so the
/// relative order of distinct entries is unchanged.
pub fn deduplicate<'a>(items: Vec<&'a CatalogItem>, is_searching: bool) -> Vec<&'a CatalogItem> {
    if !is_searching {
        return items;
    }

    let mut slots: HashMap<(&'a str, Option<&'a str>), usize> = HashMap::new();
    let mut result: Vec<&'a CatalogItem> = Vec::with_capacity(items.len());

    for item in items {
        let key = (item.name.as_str(), item.parent_group.as_deref());
        match slots.get(&key) {
            Some(&slot) => {
                if let Some(existing) = result.get_mut(slot) {
                    if item.category.priority() < existing.category.priority() {
                        *existing = item;
                    }
                }
            }
            None => {
                slots.insert(key, result.len());
                result.push(item);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn make_item(id: &str, name: &str, category: Category, group: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            category,
            section: None,
            keywords: vec![],
            parent_group: group.map(str::to_string),
        }
    }

    fn ids<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn browse_mode_passes_through() {
        let a = make_item("a", "Gmail", Category::Popular, None);
        let b = make_item("b", "Gmail", Category::Apps, None);
        let out = deduplicate(vec![&a, &b], false);
        assert_eq!(ids(&out), vec!["a", "b"]);
    }

    #[test]
    fn same_name_and_group_keeps_higher_priority_in_first_slot() {
        let popular = make_item("popular-gmail", "Gmail", Category::Popular, None);
        let slack = make_item("app-slack", "Slack", Category::Apps, Some("Apps"));
        let apps = make_item("apps-gmail", "Gmail", Category::Apps, None);
        let out = deduplicate(vec![&popular, &slack, &apps], true);
        assert_eq!(ids(&out), vec!["apps-gmail", "app-slack"]);
    }

    #[test]
    fn lower_priority_duplicate_is_dropped() {
        let tools = make_item("t", "Notion", Category::Tools, Some("X"));
        let flow = make_item("f", "Notion", Category::Flow, Some("X"));
        let out = deduplicate(vec![&tools, &flow], true);
        assert_eq!(ids(&out), vec!["t"]);
    }

    #[test]
    fn different_parent_groups_are_kept() {
        let app = make_item("app-outlook", "Outlook", Category::Apps, Some("Apps"));
        let kb = make_item("kb-outlook", "Outlook", Category::Tools, Some("Knowledge Base"));
        let out = deduplicate(vec![&app, &kb], true);
        assert_eq!(ids(&out), vec!["app-outlook", "kb-outlook"]);
    }

    #[test]
    fn sole_representative_is_never_removed() {
        let items: Vec<CatalogItem> = (0..5)
            .map(|i| make_item(&format!("id-{i}"), &format!("Node {i}"), Category::Apps, Some("Apps")))
            .collect();
        let refs: Vec<&CatalogItem> = items.iter().collect();
        let out = deduplicate(refs, true);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(deduplicate(vec![], true).is_empty());
    }
}
