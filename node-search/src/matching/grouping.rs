//! Section grouping and ordering of filtered items.
//!
//! Browsing groups by `section`. Searching ranks by score and lays sections
//! out in a fixed tier order:
//!
//! 1. `""`: exact name matches, one per name, core nodes first, then by
//!    category priority and score
//! 2. `Core Nodes`
//! 3. `Inputs`
//! 4. one section per `StackAI` section, first seen first
//! 5. everything else, labeled by parent group, section or category
//! 6. `Knowledge Base`, always last
//!
//! Within a section items are ranked by score. Tiers that end up with the
//! same label share one section and are ranked together.

use std::cmp::Reverse;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::types::{
    groups, CatalogItem, ResultSections, ScoredItem, DEFAULT_SECTION, TOP_MATCHES_SECTION,
};

use super::scoring::{score_items, sort_by_score};

/// Priority for deduplicating exact matches: core nodes beat every tab.
pub fn exact_priority(item: &CatalogItem) -> u32 {
    if item.is_parent_group(groups::CORE_NODES) {
        return 0;
    }
    item.category.priority()
}

/// Group `items` into ordered sections.
///
/// When `is_searching` is false, or `query` is blank, items are grouped by
/// section in encounter order. Otherwise they are scored and tiered.
pub fn group(items: &[&CatalogItem], is_searching: bool, query: &str) -> ResultSections {
    let lower_query = query.trim().to_lowercase();
    if !is_searching || lower_query.is_empty() {
        return group_by_section(items);
    }

    let mut scored = score_items(items, query);
    sort_by_score(&mut scored);

    let (exact, mut others): (Vec<ScoredItem<'_>>, Vec<ScoredItem<'_>>) =
        scored.into_iter().partition(|s| {
            s.item.name.to_lowercase() == lower_query && !s.item.is_knowledge_base()
        });

    let (mut top, displaced) = dedup_exact_matches(exact);
    others.extend(displaced);
    top.sort_by_key(|s| (exact_priority(s.item), Reverse(s.score)));

    let mut sections = ResultSections::new();
    sections.extend_section(TOP_MATCHES_SECTION, top.into_iter().map(|s| s.item.clone()));

    let mut core = Vec::new();
    let mut inputs = Vec::new();
    let mut stackai: IndexMap<&str, Vec<ScoredItem<'_>>> = IndexMap::new();
    let mut regular: IndexMap<&str, Vec<ScoredItem<'_>>> = IndexMap::new();
    let mut knowledge_base = Vec::new();

    for entry in others {
        let item = entry.item;
        match item.parent_group.as_deref() {
            Some(groups::KNOWLEDGE_BASE) => knowledge_base.push(entry),
            Some(groups::STACKAI) => stackai
                .entry(non_empty(item.section.as_deref()).unwrap_or(groups::STACKAI))
                .or_default()
                .push(entry),
            Some(groups::INPUTS) => inputs.push(entry),
            Some(groups::CORE_NODES) => core.push(entry),
            _ => regular.entry(regular_label(item)).or_default().push(entry),
        }
    }

    // Tiers sharing a label merge into one section, ranked together.
    let mut tiers: IndexMap<&str, Vec<ScoredItem<'_>>> = IndexMap::new();
    tiers.entry(groups::CORE_NODES).or_default().extend(core);
    tiers.entry(groups::INPUTS).or_default().extend(inputs);
    for (label, tier) in stackai.into_iter().chain(regular) {
        tiers.entry(label).or_default().extend(tier);
    }
    let mut tail = tiers.shift_remove(groups::KNOWLEDGE_BASE).unwrap_or_default();
    tail.extend(knowledge_base);
    tiers.insert(groups::KNOWLEDGE_BASE, tail);

    for (label, mut tier) in tiers {
        sort_by_score(&mut tier);
        sections.extend_section(label, tier.into_iter().map(|s| s.item.clone()));
    }

    sections
}

/// Browse grouping: by section, `"default"` for none, encounter order.
fn group_by_section(items: &[&CatalogItem]) -> ResultSections {
    let mut sections = ResultSections::new();
    for item in items {
        let label = non_empty(item.section.as_deref()).unwrap_or(DEFAULT_SECTION);
        sections.push(label, (*item).clone());
    }
    sections
}

/// Keep one exact match per name. Returns `(kept, displaced)`.
fn dedup_exact_matches<'a>(
    exact: Vec<ScoredItem<'a>>,
) -> (Vec<ScoredItem<'a>>, Vec<ScoredItem<'a>>) {
    let mut kept: Vec<ScoredItem<'a>> = Vec::with_capacity(exact.len());
    let mut displaced = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for candidate in exact {
        let name = candidate.item.name.as_str();
        let Some(slot) = slots.get(name).copied() else {
            slots.insert(name, kept.len());
            kept.push(candidate);
            continue;
        };
        match kept.get_mut(slot) {
            Some(existing) if exact_priority(candidate.item) < exact_priority(existing.item) => {
                displaced.push(std::mem::replace(existing, candidate));
            }
            _ => displaced.push(candidate),
        }
    }

    (kept, displaced)
}

/// Label for items outside the named tiers.
fn regular_label(item: &CatalogItem) -> &str {
    non_empty(item.parent_group.as_deref())
        .or_else(|| non_empty(item.section.as_deref()))
        .unwrap_or_else(|| item.category.name())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
