//! Append-only per-prompt version logs.

use std::collections::HashMap;

use crate::models::{Prompt, PromptVersion};

/// Version logs keyed by prompt id.
///
/// Each log is kept oldest first and numbered `1..=len` with no gaps, so version `n` lives at
/// index `n - 1`.
#[derive(Debug, Default)]
pub struct VersionStore {
    logs: HashMap<String, Vec<PromptVersion>>,
}

impl VersionStore {
    /// Append a snapshot of `prompt` as the next version in its log.
    pub fn append_snapshot(&mut self, prompt: &Prompt) -> PromptVersion {
        let next = self.latest_number(&prompt.id).map_or(1, |n| n + 1);
        let version = PromptVersion::snapshot(prompt, next);
        self.logs
            .entry(prompt.id.clone())
            .or_default()
            .push(version.clone());
        version
    }

    /// All versions for a prompt, newest first. Empty if the prompt has no log.
    pub fn list(&self, prompt_id: &str) -> Vec<PromptVersion> {
        self.logs
            .get(prompt_id)
            .map(|log| log.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// Look up version `n`. Numbers outside `1..=latest` yield `None`.
    pub fn get(&self, prompt_id: &str, version_number: i64) -> Option<&PromptVersion> {
        let index = usize::try_from(version_number).ok()?.checked_sub(1)?;
        self.logs.get(prompt_id)?.get(index)
    }

    pub fn latest_number(&self, prompt_id: &str) -> Option<u32> {
        self.logs
            .get(prompt_id)
            .and_then(|log| log.last())
            .map(|v| v.version_number)
    }

    /// Drop the whole log for a prompt. Returns how many versions were removed.
    pub fn delete_all(&mut self, prompt_id: &str) -> usize {
        self.logs.remove(prompt_id).map_or(0, |log| log.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PromptDraft;

    fn prompt(content: &str) -> Prompt {
        Prompt::from_draft(PromptDraft {
            title: "Title".to_string(),
            content: content.to_string(),
            description: None,
            collection_id: None,
            tags: vec!["tag".to_string()],
        })
    }

    #[test]
    fn test_numbers_start_at_one_and_increase() {
        let mut store = VersionStore::default();
        let mut p = prompt("v1");

        assert_eq!(store.append_snapshot(&p).version_number, 1);
        p.content = "v2".to_string();
        assert_eq!(store.append_snapshot(&p).version_number, 2);
        p.content = "v3".to_string();
        assert_eq!(store.append_snapshot(&p).version_number, 3);

        assert_eq!(store.latest_number(&p.id), Some(3));
        assert_eq!(store.list(&p.id).len(), 3);
    }

    #[test]
    fn test_logs_are_independent_per_prompt() {
        let mut store = VersionStore::default();
        let a = prompt("a");
        let b = prompt("b");
        store.append_snapshot(&a);
        store.append_snapshot(&a);
        assert_eq!(store.append_snapshot(&b).version_number, 1);
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut store = VersionStore::default();
        let mut p = prompt("v1");
        store.append_snapshot(&p);
        p.content = "v2".to_string();
        store.append_snapshot(&p);

        let numbers: Vec<u32> = store.list(&p.id).iter().map(|v| v.version_number).collect();
        assert_eq!(numbers, vec![2, 1]);
        assert!(store.list("unknown").is_empty());
    }

    #[test]
    fn test_get_exact_version() {
        let mut store = VersionStore::default();
        let mut p = prompt("first");
        store.append_snapshot(&p);
        p.content = "second".to_string();
        store.append_snapshot(&p);

        assert_eq!(store.get(&p.id, 1).unwrap().content, "first");
        assert_eq!(store.get(&p.id, 2).unwrap().content, "second");
        assert!(store.get(&p.id, 0).is_none());
        assert!(store.get(&p.id, 3).is_none());
        assert!(store.get(&p.id, -1).is_none());
        assert!(store.get(&p.id, i64::from(u32::MAX) + 1).is_none());
        assert!(store.get("unknown", 1).is_none());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut store = VersionStore::default();
        let mut p = prompt("content");
        store.append_snapshot(&p);
        p.tags.push("later".to_string());
        assert_eq!(store.get(&p.id, 1).unwrap().tags, vec!["tag"]);
    }

    #[test]
    fn test_delete_all() {
        let mut store = VersionStore::default();
        let p = prompt("content");
        store.append_snapshot(&p);
        store.append_snapshot(&p);

        assert_eq!(store.delete_all(&p.id), 2);
        assert_eq!(store.delete_all(&p.id), 0);
        assert!(store.list(&p.id).is_empty());
        assert_eq!(store.latest_number(&p.id), None);
    }
}
