//! Category-tab filtering and the combined filter pipeline.
//!
//! Browsing shows one tab. Searching spans every tab but hides `Popular`
//! duplicates, except curated core nodes.

use crate::config::SearchOptions;
use crate::types::{groups, CatalogItem, Category, Query};

use super::dedup::deduplicate;
use super::predicate::matches_with;

/// Returns `true` if `item` passes the category rules for `query`.
///
/// - Browsing: the item must be in the selected tab. The Tools tab hides
///   knowledge base sources; the Flow tab lists only flow-control nodes.
/// - Searching: the tab is ignored; `Popular` items are hidden unless they
///   are core nodes.
pub fn passes_category(item: &CatalogItem, query: &Query) -> bool {
    if query.is_searching() {
        return item.category != Category::Popular || item.is_parent_group(groups::CORE_NODES);
    }

    if item.category != query.selected_category {
        return false;
    }
    match query.selected_category {
        Category::Tools => item.section.as_deref() != Some(groups::KNOWLEDGE_BASE),
        Category::Flow => item.is_parent_group(groups::FLOW),
        Category::Popular | Category::Apps => true,
    }
}

/// Apply the category rules to `items`, keeping order.
pub fn filter_by_category<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    query: &Query,
) -> Vec<&'a CatalogItem> {
    items
        .into_iter()
        .filter(|item| passes_category(item, query))
        .collect()
}

/// Match, category-filter and (when searching) deduplicate `items`.
pub fn filter_nodes<'a>(
    items: &'a [CatalogItem],
    query: &Query,
    options: &SearchOptions,
) -> Vec<&'a CatalogItem> {
    let filtered: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| passes_category(item, query))
        .filter(|item| matches_with(item, &query.text, options.semantic_fallback))
        .collect();
    deduplicate(filtered, query.is_searching())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(
        id: &str,
        name: &str,
        category: Category,
        group: Option<&str>,
        section: Option<&str>,
    ) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            category,
            section: section.map(str::to_string),
            keywords: vec![],
            parent_group: group.map(str::to_string),
        }
    }

    fn ids<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn browse_keeps_only_selected_tab() {
        let app = make_item("app", "Slack", Category::Apps, Some("Apps"), None);
        let tool = make_item("tool", "Web Search", Category::Tools, Some("StackAI"), Some("Utilities"));
        let out = filter_by_category([&app, &tool], &Query::browse(Category::Apps));
        assert_eq!(ids(&out), vec!["app"]);
    }

    #[test]
    fn flow_tab_lists_only_flow_group() {
        let trigger = make_item("trigger", "Webhook", Category::Flow, Some("Triggers"), None);
        let flow = make_item("flow", "Condition", Category::Flow, Some("Flow"), None);
        let out = filter_by_category([&trigger, &flow], &Query::browse(Category::Flow));
        assert_eq!(ids(&out), vec!["flow"]);
    }

    #[test]
    fn tools_tab_hides_knowledge_base_section() {
        let kb = make_item("kb", "Notion", Category::Tools, Some("Knowledge Base"), Some("Knowledge Base"));
        let kb_cloud = make_item("kb2", "Drive", Category::Tools, Some("Knowledge Base"), Some("Cloud"));
        let tool = make_item("tool", "Web Search", Category::Tools, Some("StackAI"), Some("Utilities"));
        let out = filter_by_category([&kb, &kb_cloud, &tool], &Query::browse(Category::Tools));
        assert_eq!(ids(&out), vec!["kb2", "tool"]);
    }

    #[test]
    fn search_ignores_tab_and_hides_popular_duplicates() {
        let popular = make_item("popular", "Gmail", Category::Popular, None, None);
        let core = make_item("core", "AI Agent", Category::Popular, Some("Core Nodes"), None);
        let app = make_item("app", "Gmail", Category::Apps, Some("Apps"), None);
        let kb = make_item("kb", "Notion", Category::Tools, Some("Knowledge Base"), Some("Knowledge Base"));
        let query = Query::new("x", Category::Tools);
        let out = filter_by_category([&popular, &core, &app, &kb], &query);
        assert_eq!(ids(&out), vec!["core", "app", "kb"]);
    }

    #[test]
    fn filter_nodes_matches_then_dedups() {
        let items = vec![
            make_item("a", "Gmail", Category::Apps, Some("Apps"), None),
            make_item("b", "Gmail", Category::Tools, Some("Apps"), None),
            make_item("c", "Slack", Category::Apps, Some("Apps"), None),
        ];
        let out = filter_nodes(&items, &Query::new("gmail", Category::Popular), &SearchOptions::default());
        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn filter_nodes_browse_returns_whole_tab() {
        let items = vec![
            make_item("a", "Gmail", Category::Apps, Some("Apps"), None),
            make_item("b", "Gmail", Category::Apps, Some("Apps"), None),
        ];
        let out = filter_nodes(&items, &Query::browse(Category::Apps), &SearchOptions::default());
        assert_eq!(ids(&out), vec!["a", "b"]);
    }
}
