//! Filtering and ordering of prompt listings.
//!
//! Filters run in a fixed order (collection, free-text search, tags) and the result is
//! always sorted newest first.

use crate::models::{ListPromptsQuery, Prompt};

/// Filters for a prompt listing. Empty filters are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptFilter {
    pub collection_id: Option<String>,
    pub search: Option<String>,
    pub tags: Vec<String>,
}

impl PromptFilter {
    /// Split a comma separated tag list, trimming tokens and dropping empty ones.
    ///
    /// Tokens are lowercased to match stored tags.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl From<ListPromptsQuery> for PromptFilter {
    fn from(query: ListPromptsQuery) -> Self {
        Self {
            collection_id: query.collection_id.filter(|c| !c.is_empty()),
            search: query.search.filter(|s| !s.is_empty()),
            tags: query
                .tags
                .as_deref()
                .map(Self::parse_tags)
                .unwrap_or_default(),
        }
    }
}

/// Run the full listing pipeline over `prompts`.
pub fn apply(prompts: Vec<Prompt>, filter: &PromptFilter) -> Vec<Prompt> {
    let mut prompts = prompts;
    if let Some(collection_id) = &filter.collection_id {
        prompts = filter_by_collection(prompts, collection_id);
    }
    if let Some(query) = &filter.search {
        prompts = search_prompts(prompts, query);
    }
    if !filter.tags.is_empty() {
        prompts = filter_by_tags(prompts, &filter.tags);
    }
    sort_by_created(prompts, true)
}

pub fn filter_by_collection(prompts: Vec<Prompt>, collection_id: &str) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| p.collection_id.as_deref() == Some(collection_id))
        .collect()
}

/// Case-insensitive substring match against the title or the description.
pub fn search_prompts(prompts: Vec<Prompt>, query: &str) -> Vec<Prompt> {
    let needle = query.to_lowercase();
    prompts
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keep prompts carrying every one of `tags`.
pub fn filter_by_tags(prompts: Vec<Prompt>, tags: &[String]) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| tags.iter().all(|t| p.tags.contains(t)))
        .collect()
}

/// Sort by `created_at`; ties fall back to the id so output order is stable.
pub fn sort_by_created(mut prompts: Vec<Prompt>, descending: bool) -> Vec<Prompt> {
    prompts.sort_by(|a, b| {
        let ord = a
            .created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    prompts
}
