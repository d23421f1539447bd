//! Keyed in-memory storage for prompts and collections.

use std::collections::HashMap;

use crate::models::{Collection, Prompt};

/// Id-keyed maps of the current prompts and collections.
///
/// The store does not check id uniqueness; inserting an existing id overwrites it.
#[derive(Debug, Default)]
pub struct EntityStore {
    prompts: HashMap<String, Prompt>,
    collections: HashMap<String, Collection>,
}

impl EntityStore {
    // ==================== PROMPTS ====================

    pub fn create_prompt(&mut self, prompt: Prompt) -> Prompt {
        self.prompts.insert(prompt.id.clone(), prompt.clone());
        prompt
    }

    pub fn get_prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.get(id)
    }

    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts.values().cloned().collect()
    }

    /// Overwrite an existing prompt. Returns `None` without inserting if `id` is unknown.
    pub fn replace_prompt(&mut self, id: &str, prompt: Prompt) -> Option<Prompt> {
        let slot = self.prompts.get_mut(id)?;
        *slot = prompt.clone();
        Some(prompt)
    }

    pub fn delete_prompt(&mut self, id: &str) -> bool {
        self.prompts.remove(id).is_some()
    }

    pub fn prompts_in_collection(&self, collection_id: &str) -> Vec<Prompt> {
        self.prompts
            .values()
            .filter(|p| p.collection_id.as_deref() == Some(collection_id))
            .cloned()
            .collect()
    }

    /// Administrative patch: detach every prompt from `collection_id`.
    ///
    /// Only `collection_id` changes. `updated_at` and the content fields are left alone, so
    /// this is not a versioned mutation. Returns the ids of the detached prompts.
    pub fn clear_collection(&mut self, collection_id: &str) -> Vec<String> {
        let detached: Vec<String> = self
            .prompts_in_collection(collection_id)
            .into_iter()
            .map(|p| p.id)
            .collect();
        for id in &detached {
            if let Some(prompt) = self.prompts.get_mut(id) {
                prompt.collection_id = None;
            }
        }
        detached
    }

    // ==================== COLLECTIONS ====================

    pub fn create_collection(&mut self, collection: Collection) -> Collection {
        self.collections
            .insert(collection.id.clone(), collection.clone());
        collection
    }

    pub fn get_collection(&self, id: &str) -> Option<&Collection> {
        self.collections.get(id)
    }

    pub fn has_collection(&self, id: &str) -> bool {
        self.collections.contains_key(id)
    }

    pub fn list_collections(&self) -> Vec<Collection> {
        self.collections.values().cloned().collect()
    }

    pub fn delete_collection(&mut self, id: &str) -> bool {
        self.collections.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PromptDraft;

    fn prompt(title: &str, collection_id: Option<&str>) -> Prompt {
        Prompt::from_draft(PromptDraft {
            title: title.to_string(),
            content: "content".to_string(),
            description: None,
            collection_id: collection_id.map(str::to_string),
            tags: vec![],
        })
    }

    #[test]
    fn test_prompt_crud() {
        let mut store = EntityStore::default();
        let created = store.create_prompt(prompt("First", None));
        assert_eq!(store.get_prompt(&created.id), Some(&created));
        assert_eq!(store.list_prompts().len(), 1);

        let mut changed = created.clone();
        changed.title = "Renamed".to_string();
        assert_eq!(
            store.replace_prompt(&created.id, changed.clone()),
            Some(changed.clone())
        );
        assert_eq!(store.get_prompt(&created.id).unwrap().title, "Renamed");

        assert!(store.delete_prompt(&created.id));
        assert!(!store.delete_prompt(&created.id));
        assert!(store.get_prompt(&created.id).is_none());
    }

    #[test]
    fn test_replace_unknown_does_not_insert() {
        let mut store = EntityStore::default();
        let orphan = prompt("Orphan", None);
        assert!(store.replace_prompt(&orphan.id, orphan.clone()).is_none());
        assert!(store.list_prompts().is_empty());
    }

    #[test]
    fn test_prompts_in_collection() {
        let mut store = EntityStore::default();
        store.create_prompt(prompt("A", Some("c1")));
        store.create_prompt(prompt("B", Some("c2")));
        store.create_prompt(prompt("C", Some("c1")));
        store.create_prompt(prompt("D", None));

        let mut titles: Vec<String> = store
            .prompts_in_collection("c1")
            .into_iter()
            .map(|p| p.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_clear_collection_touches_only_members() {
        let mut store = EntityStore::default();
        let member = store.create_prompt(prompt("Member", Some("c1")));
        let other = store.create_prompt(prompt("Other", Some("c2")));

        let detached = store.clear_collection("c1");
        assert_eq!(detached, vec![member.id.clone()]);

        let cleared = store.get_prompt(&member.id).unwrap();
        assert_eq!(cleared.collection_id, None);
        assert_eq!(cleared.updated_at, member.updated_at);
        assert_eq!(cleared.title, member.title);
        assert_eq!(
            store.get_prompt(&other.id).unwrap().collection_id.as_deref(),
            Some("c2")
        );
    }

    #[test]
    fn test_collection_crud() {
        let mut store = EntityStore::default();
        let collection = store.create_collection(Collection {
            id: "c1".to_string(),
            name: "Writing".to_string(),
            description: None,
            created_at: chrono::Utc::now(),
        });
        assert!(store.has_collection("c1"));
        assert_eq!(store.get_collection("c1"), Some(&collection));
        assert_eq!(store.list_collections().len(), 1);
        assert!(store.delete_collection("c1"));
        assert!(!store.delete_collection("c1"));
        assert!(!store.has_collection("c1"));
    }
}
