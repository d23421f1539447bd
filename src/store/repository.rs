//! Prompt and collection repository.
//!
//! Every prompt mutation updates the entity store and appends a version snapshot while
//! holding a single write lock, so readers never see one without the other.

use chrono::Utc;
use tokio::sync::RwLock;

use super::entities::EntityStore;
use super::query::{self, PromptFilter};
use super::versions::VersionStore;
use super::StoreError;
use crate::models::{
    extract_variables, normalize_tags, Collection, CreateCollectionRequest, Prompt, PromptDraft,
    PromptPatch, PromptVersion, VersionOrder,
};

/// Re-apply tag normalization. Already canonical lists pass through unchanged.
fn canonical_tags(tags: Vec<String>) -> Result<Vec<String>, StoreError> {
    Ok(normalize_tags(Some(tags), false)?.unwrap_or_default())
}

#[derive(Debug, Default)]
struct StoreState {
    entities: EntityStore,
    versions: VersionStore,
}

impl StoreState {
    fn require_prompt(&self, id: &str) -> Result<&Prompt, StoreError> {
        self.entities
            .get_prompt(id)
            .ok_or_else(|| StoreError::PromptNotFound(id.to_string()))
    }

    fn require_collection_ref(&self, collection_id: Option<&str>) -> Result<(), StoreError> {
        match collection_id {
            Some(id) if !self.entities.has_collection(id) => {
                Err(StoreError::UnknownCollection(id.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Store the new state of an existing prompt and snapshot it as the next version.
    fn commit(&mut self, prompt: Prompt) -> Result<(Prompt, PromptVersion), StoreError> {
        let id = prompt.id.clone();
        let saved = self
            .entities
            .replace_prompt(&id, prompt)
            .ok_or_else(|| StoreError::Internal(format!("Failed to update prompt {}", id)))?;
        let version = self.versions.append_snapshot(&saved);
        Ok((saved, version))
    }
}

/// In-memory repository for all prompt, version and collection operations.
#[derive(Debug, Default)]
pub struct Repository {
    state: RwLock<StoreState>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== PROMPT READS ====================

    /// List prompts through the filter pipeline, newest first.
    pub async fn list_prompts(&self, filter: &PromptFilter) -> Vec<Prompt> {
        let state = self.state.read().await;
        query::apply(state.entities.list_prompts(), filter)
    }

    pub async fn get_prompt(&self, id: &str) -> Result<Prompt, StoreError> {
        let state = self.state.read().await;
        state.require_prompt(id).cloned()
    }

    /// Names of the `{{variable}}` placeholders in a prompt's current content.
    pub async fn prompt_variables(&self, id: &str) -> Result<Vec<String>, StoreError> {
        let state = self.state.read().await;
        let prompt = state.require_prompt(id)?;
        Ok(extract_variables(&prompt.content))
    }

    // ==================== PROMPT MUTATIONS ====================

    /// Create a prompt and record it as version 1.
    pub async fn create_prompt(&self, mut draft: PromptDraft) -> Result<Prompt, StoreError> {
        draft.tags = canonical_tags(draft.tags)?;
        let mut state = self.state.write().await;
        state.require_collection_ref(draft.collection_id.as_deref())?;

        let prompt = state.entities.create_prompt(Prompt::from_draft(draft));
        let version = state.versions.append_snapshot(&prompt);

        tracing::info!(
            prompt_id = %prompt.id,
            version_number = version.version_number,
            "Created prompt"
        );
        Ok(prompt)
    }

    /// Replace every writable field of a prompt.
    pub async fn replace_prompt(
        &self,
        id: &str,
        mut draft: PromptDraft,
    ) -> Result<Prompt, StoreError> {
        draft.tags = canonical_tags(draft.tags)?;
        let mut state = self.state.write().await;
        let existing = state.require_prompt(id)?;
        let created_at = existing.created_at;
        state.require_collection_ref(draft.collection_id.as_deref())?;

        let updated = Prompt {
            id: id.to_string(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: draft.collection_id,
            tags: draft.tags,
            created_at,
            updated_at: Utc::now(),
        };

        let (saved, version) = state.commit(updated)?;
        tracing::info!(
            prompt_id = %id,
            version_number = version.version_number,
            "Replaced prompt"
        );
        Ok(saved)
    }

    /// Overwrite only the fields carried by `patch`.
    pub async fn patch_prompt(
        &self,
        id: &str,
        mut patch: PromptPatch,
    ) -> Result<Prompt, StoreError> {
        if let Some(tags) = patch.tags.take() {
            patch.tags = Some(canonical_tags(tags)?);
        }
        let mut state = self.state.write().await;
        let existing = state.require_prompt(id)?.clone();
        state.require_collection_ref(patch.collection_id.as_deref())?;

        let (saved, version) = state.commit(patch.apply_to(&existing))?;
        tracing::info!(
            prompt_id = %id,
            version_number = version.version_number,
            "Patched prompt"
        );
        Ok(saved)
    }

    /// Restore the content fields of an earlier version as a new version.
    ///
    /// The log only moves forward: reverting to version 1 from version 3 creates version 4.
    pub async fn revert_prompt(
        &self,
        id: &str,
        version_number: i64,
    ) -> Result<Prompt, StoreError> {
        let mut state = self.state.write().await;
        let existing = state.require_prompt(id)?;
        let target = state
            .versions
            .get(id, version_number)
            .ok_or_else(|| StoreError::VersionNotFound {
                prompt_id: id.to_string(),
                version_number,
            })?;

        let reverted = Prompt {
            id: existing.id.clone(),
            title: target.title.clone(),
            content: target.content.clone(),
            description: target.description.clone(),
            collection_id: existing.collection_id.clone(),
            tags: target.tags.clone(),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        let (saved, version) = state.commit(reverted)?;
        tracing::info!(
            prompt_id = %id,
            reverted_to = version_number,
            version_number = version.version_number,
            "Reverted prompt"
        );
        Ok(saved)
    }

    /// Delete a prompt together with its entire version log.
    pub async fn delete_prompt(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if !state.entities.delete_prompt(id) {
            return Err(StoreError::PromptNotFound(id.to_string()));
        }
        let removed = state.versions.delete_all(id);

        tracing::info!(prompt_id = %id, versions_removed = removed, "Deleted prompt");
        Ok(())
    }

    // ==================== VERSIONS ====================

    pub async fn list_versions(
        &self,
        prompt_id: &str,
        order: VersionOrder,
    ) -> Result<Vec<PromptVersion>, StoreError> {
        let state = self.state.read().await;
        state.require_prompt(prompt_id)?;

        let mut versions = state.versions.list(prompt_id);
        if order == VersionOrder::Asc {
            versions.reverse();
        }
        Ok(versions)
    }

    pub async fn get_version(
        &self,
        prompt_id: &str,
        version_number: i64,
    ) -> Result<PromptVersion, StoreError> {
        let state = self.state.read().await;
        state.require_prompt(prompt_id)?;

        state
            .versions
            .get(prompt_id, version_number)
            .cloned()
            .ok_or_else(|| StoreError::VersionNotFound {
                prompt_id: prompt_id.to_string(),
                version_number,
            })
    }

    // ==================== COLLECTIONS ====================

    pub async fn list_collections(&self) -> Vec<Collection> {
        let state = self.state.read().await;
        let mut collections = state.entities.list_collections();
        collections.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        collections
    }

    pub async fn get_collection(&self, id: &str) -> Result<Collection, StoreError> {
        let state = self.state.read().await;
        state
            .entities
            .get_collection(id)
            .cloned()
            .ok_or_else(|| StoreError::CollectionNotFound(id.to_string()))
    }

    pub async fn create_collection(&self, request: CreateCollectionRequest) -> Collection {
        let mut state = self.state.write().await;
        let collection = state
            .entities
            .create_collection(Collection::from_request(request));

        tracing::info!(collection_id = %collection.id, "Created collection");
        collection
    }

    /// Delete a collection, first detaching its member prompts.
    ///
    /// Detaching does not create versions. Returns the ids of the detached prompts.
    pub async fn delete_collection(&self, id: &str) -> Result<Vec<String>, StoreError> {
        let mut state = self.state.write().await;
        if !state.entities.has_collection(id) {
            return Err(StoreError::CollectionNotFound(id.to_string()));
        }

        let detached = state.entities.clear_collection(id);
        state.entities.delete_collection(id);

        tracing::info!(
            collection_id = %id,
            prompts_detached = detached.len(),
            "Deleted collection"
        );
        Ok(detached)
    }
}

#[cfg(test)]
impl Repository {
    pub async fn version_count(&self, prompt_id: &str) -> usize {
        self.state.read().await.versions.list(prompt_id).len()
    }

    pub async fn latest_version_number(&self, prompt_id: &str) -> Option<u32> {
        self.state.read().await.versions.latest_number(prompt_id)
    }

    pub async fn prompts_in_collection(&self, collection_id: &str) -> Vec<Prompt> {
        let state = self.state.read().await;
        query::sort_by_created(state.entities.prompts_in_collection(collection_id), true)
    }
}
