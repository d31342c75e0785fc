//! Core types for catalog items, queries and grouped results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Section key for the unlabeled top-matches section shown while searching.
pub const TOP_MATCHES_SECTION: &str = "";

/// Section key for items without a section when browsing a category tab.
pub const DEFAULT_SECTION: &str = "default";

/// Priority assigned to anything outside the known category table.
pub const UNKNOWN_PRIORITY: u32 = 999;

/// Well-known parent groups, i.e. the top-level keys of the nodes document.
pub mod groups {
    /// Workflow inputs.
    pub const INPUTS: &str = "Inputs";
    /// Workflow triggers.
    pub const TRIGGERS: &str = "Triggers";
    /// Workflow outputs.
    pub const OUTPUTS: &str = "Outputs";
    /// Curated core nodes, kept visible in search even though they are `Popular`.
    pub const CORE_NODES: &str = "Core Nodes";
    /// Third-party app integrations.
    pub const APPS: &str = "Apps";
    /// Flow-control nodes.
    pub const FLOW: &str = "Flow";
    /// Built-in platform tools, sub-grouped by section.
    pub const STACKAI: &str = "StackAI";
    /// Knowledge base sources. Always ranked last while searching.
    pub const KNOWLEDGE_BASE: &str = "Knowledge Base";
}

/// The category tabs of the node picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Curated, most-used nodes. The tab shown first.
    #[default]
    Popular,
    /// Platform tools and knowledge base sources.
    Tools,
    /// App integrations.
    Apps,
    /// Inputs, triggers, outputs and flow-control nodes.
    Flow,
}

impl Category {
    /// Returns the display name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Tools => "Tools",
            Self::Apps => "Apps",
            Self::Flow => "Flow",
        }
    }

    /// Dedup priority: lower wins when two same-named items collapse.
    pub fn priority(&self) -> u32 {
        match self {
            Self::Apps => 1,
            Self::Tools => 2,
            Self::Flow => 3,
            Self::Popular => 4,
        }
    }

    /// Returns all categories in tab order.
    pub fn all() -> &'static [Category] {
        &[Self::Popular, Self::Tools, Self::Apps, Self::Flow]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SearchError::UnknownCategory(s.to_string()))
    }
}

/// A selectable node definition from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique id across the whole catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The tab this item is listed under.
    pub category: Category,
    /// Optional sub-heading within a tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Search keywords. Empty means "no keywords".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// The top-level source grouping the item came from (see [`groups`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<String>,
}

impl CatalogItem {
    /// Returns `true` if the item was sourced from `group`.
    pub fn is_parent_group(&self, group: &str) -> bool {
        self.parent_group.as_deref() == Some(group)
    }

    /// Returns `true` for knowledge base sources.
    pub fn is_knowledge_base(&self) -> bool {
        self.is_parent_group(groups::KNOWLEDGE_BASE)
    }

    /// Lowercased keywords, in catalog order.
    pub(crate) fn lower_keywords(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.to_lowercase()).collect()
    }
}

/// A picker query: free text plus the selected category tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Raw search text as typed.
    pub text: String,
    /// The active category tab. Ignored for filtering while searching.
    pub selected_category: Category,
}

impl Query {
    /// Create a query from text and a selected tab.
    pub fn new(text: impl Into<String>, selected_category: Category) -> Self {
        Self {
            text: text.into(),
            selected_category,
        }
    }

    /// Browse a category tab without search text.
    pub fn browse(selected_category: Category) -> Self {
        Self::new(String::new(), selected_category)
    }

    /// Returns `true` when the text is non-blank (search mode).
    pub fn is_searching(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Trimmed, lowercased query text.
    pub fn normalized(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// A catalog item paired with its score for the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    /// The scored item.
    pub item: &'a CatalogItem,
    /// Additive relevance score (higher is better).
    pub score: u32,
}

/// Ordered mapping from section label to the items shown under it.
///
/// Iteration order is insertion order. The [`TOP_MATCHES_SECTION`] key is
/// unlabeled and, when present, always first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSections {
    sections: IndexMap<String, Vec<CatalogItem>>,
}

impl ResultSections {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the section `label`, creating the section at the end
    /// if it does not exist yet.
    pub fn push(&mut self, label: &str, item: CatalogItem) {
        self.sections.entry(label.to_string()).or_default().push(item);
    }

    /// Append a whole section. Items are merged into an existing section of
    /// the same label. Empty inputs create nothing.
    pub fn extend_section(&mut self, label: &str, items: impl IntoIterator<Item = CatalogItem>) {
        for item in items {
            self.push(label, item);
        }
    }

    /// Remove a section, returning its items.
    pub(crate) fn take_section(&mut self, label: &str) -> Option<Vec<CatalogItem>> {
        self.sections.shift_remove(label)
    }

    /// Items under `label`, if the section exists.
    pub fn get(&self, label: &str) -> Option<&[CatalogItem]> {
        self.sections.get(label).map(Vec::as_slice)
    }

    /// Returns `true` if a section labeled `label` exists.
    pub fn contains_section(&self, label: &str) -> bool {
        self.sections.contains_key(label)
    }

    /// Section labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// `(label, items)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CatalogItem])> {
        self.sections
            .iter()
            .map(|(label, items)| (label.as_str(), items.as_slice()))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Truncate every section to at most `max` items.
    pub(crate) fn truncate_sections(&mut self, max: usize) {
        for items in self.sections.values_mut() {
            items.truncate(max);
        }
    }

    /// Consume into the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Vec<CatalogItem>> {
        self.sections
    }
}

impl IntoIterator for ResultSections {
    type Item = (String, Vec<CatalogItem>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<CatalogItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}
