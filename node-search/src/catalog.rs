//! The read-only node catalog and its JSON nodes document.
//!
//! A nodes document groups node definitions under top-level source keys
//! (`Inputs`, `Core Nodes`, `Apps`, `StackAI`, ...). [`Catalog::from_document`]
//! flattens it into [`CatalogItem`]s, assigning each a tab [`Category`], a
//! parent group, an optional section and a unique id.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::{groups, CatalogItem, Category};

/// An immutable, id-indexed collection of catalog items in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from items, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DuplicateId`] if two items share an id.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, SearchError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(SearchError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flatten a parsed nodes document into a catalog.
    pub fn from_document(document: &NodesDocument) -> Self {
        let mut loader = DocumentLoader::default();
        loader.load(document);
        let items = loader.items;
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        tracing::debug!(items = items.len(), "catalog loaded from nodes document");
        Self { items, index }
    }

    /// Parse a JSON nodes document and flatten it into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] if the JSON does not match the
    /// nodes document shape.
    pub fn from_json_str(json: &str) -> Result<Self, SearchError> {
        let document: NodesDocument =
            serde_json::from_str(json).map_err(|e| SearchError::Parse(e.to_string()))?;
        Ok(Self::from_document(&document))
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// Iterate over items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A node definition: either a bare name or a detailed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeEntry {
    /// Name only, no keywords.
    Name(String),
    /// Name with optional keywords and subactions.
    Detailed(NodeSpec),
}

/// A detailed node definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Display name.
    pub name: String,
    /// Search keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Sub-actions, only honoured under `Core Nodes`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subactions: Vec<Subaction>,
}

/// A searchable sub-action of a core node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subaction {
    /// Display name.
    pub name: String,
}

impl NodeEntry {
    fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed(spec) => &spec.name,
        }
    }

    fn keywords(&self) -> &[String] {
        match self {
            Self::Name(_) => &[],
            Self::Detailed(spec) => &spec.keywords,
        }
    }

    fn subactions(&self) -> &[Subaction] {
        match self {
            Self::Name(_) => &[],
            Self::Detailed(spec) => &spec.subactions,
        }
    }
}

/// `Knowledge Base` is either a flat list or a map of named sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KnowledgeBaseEntries {
    /// Flat list, all under the `Knowledge Base` section.
    List(Vec<NodeEntry>),
    /// Section name to sources.
    Sections(IndexMap<String, Vec<NodeEntry>>),
}

/// The JSON nodes document the catalog is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodesDocument {
    /// Workflow inputs.
    #[serde(rename = "Inputs", default)]
    pub inputs: Vec<NodeEntry>,
    /// Workflow triggers.
    #[serde(rename = "Triggers", default)]
    pub triggers: Vec<NodeEntry>,
    /// Workflow outputs.
    #[serde(rename = "Outputs", default)]
    pub outputs: Vec<NodeEntry>,
    /// Curated core nodes, optionally with subactions.
    #[serde(rename = "Core Nodes", default)]
    pub core_nodes: Vec<NodeEntry>,
    /// Popular shortcuts without a parent group.
    #[serde(rename = "Popular", default)]
    pub popular: Vec<NodeEntry>,
    /// App integrations.
    #[serde(rename = "Apps", default)]
    pub apps: Vec<NodeEntry>,
    /// Flow-control nodes.
    #[serde(rename = "Flow", default)]
    pub flow: Vec<NodeEntry>,
    /// Platform tools by section.
    #[serde(rename = "StackAI", default)]
    pub stackai: IndexMap<String, Vec<NodeEntry>>,
    /// Knowledge base sources.
    #[serde(rename = "Knowledge Base", default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<KnowledgeBaseEntries>,
    /// Keys the catalog does not know about. Ignored.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

/// Slugify `name` and prepend `prefix`: lowercase, with every run of
/// characters outside `[a-z0-9]` collapsed to a single `-`.
pub fn generate_id(name: &str, prefix: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    format!("{prefix}-{slug}")
}

#[derive(Default)]
struct DocumentLoader {
    items: Vec<CatalogItem>,
    used_ids: HashSet<String>,
}

impl DocumentLoader {
    fn load(&mut self, doc: &NodesDocument) {
        for entry in &doc.inputs {
            self.push(entry, "input", Category::Flow, Some(groups::INPUTS), None, None);
        }
        for entry in &doc.triggers {
            self.push(entry, "trigger", Category::Flow, Some(groups::TRIGGERS), None, None);
        }
        for entry in &doc.outputs {
            self.push(entry, "output", Category::Flow, Some(groups::OUTPUTS), None, None);
        }
        for entry in &doc.core_nodes {
            self.push(entry, "core", Category::Popular, Some(groups::CORE_NODES), None, None);
            for sub in entry.subactions() {
                let sub_entry = NodeEntry::Name(sub.name.clone());
                self.push(
                    &sub_entry,
                    "core-subaction",
                    Category::Popular,
                    Some(groups::CORE_NODES),
                    Some(entry.name()),
                    Some(entry.keywords()),
                );
            }
        }
        for entry in &doc.popular {
            let exists = self
                .items
                .iter()
                .any(|item| item.name == entry.name() && item.category == Category::Popular);
            if !exists {
                self.push(entry, "popular", Category::Popular, None, None, None);
            }
        }
        for entry in &doc.apps {
            self.push(entry, "app", Category::Apps, Some(groups::APPS), None, None);
        }
        for entry in &doc.flow {
            self.push(entry, "flow", Category::Flow, Some(groups::FLOW), None, None);
        }
        for (section, entries) in &doc.stackai {
            for entry in entries {
                self.push(entry, "stackai", Category::Tools, Some(groups::STACKAI), Some(section), None);
            }
        }
        match &doc.knowledge_base {
            Some(KnowledgeBaseEntries::List(entries)) => {
                for entry in entries {
                    self.push(
                        entry,
                        "knowledge-base",
                        Category::Tools,
                        Some(groups::KNOWLEDGE_BASE),
                        Some(groups::KNOWLEDGE_BASE),
                        None,
                    );
                }
            }
            Some(KnowledgeBaseEntries::Sections(sections)) => {
                for (section, entries) in sections {
                    for entry in entries {
                        self.push(
                            entry,
                            "knowledge-base",
                            Category::Tools,
                            Some(groups::KNOWLEDGE_BASE),
                            Some(section),
                            None,
                        );
                    }
                }
            }
            None => {}
        }
        for key in doc.other.keys() {
            tracing::debug!(key = %key, "ignoring unknown nodes document key");
        }
    }

    fn push(
        &mut self,
        entry: &NodeEntry,
        prefix: &str,
        category: Category,
        parent_group: Option<&str>,
        section: Option<&str>,
        inherited_keywords: Option<&[String]>,
    ) {
        let name = entry.name().to_string();
        let keywords = inherited_keywords.unwrap_or_else(|| entry.keywords()).to_vec();
        let id = self.unique_id(generate_id(&name, prefix));
        self.items.push(CatalogItem {
            id,
            name,
            category,
            section: section.map(str::to_string),
            keywords,
            parent_group: parent_group.map(str::to_string),
        });
    }

    fn unique_id(&mut self, base: String) -> String {
        if self.used_ids.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if self.used_ids.insert(candidate.clone()) {
                tracing::debug!(id = %base, renamed = %candidate, "disambiguated colliding catalog id");
                return candidate;
            }
            n += 1;
        }
    }
}
