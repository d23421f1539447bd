//! Prompt model and the request bodies that create or modify prompts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::tag::{normalize_tags, TagError};

/// A stored prompt. The version log keeps every historical state of its content fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Build a brand new prompt from a draft with a fresh id and timestamps.
    pub fn from_draft(draft: PromptDraft) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: draft.collection_id,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body for `POST /prompts` and `PUT /prompts/{id}`.
///
/// A PUT replaces every field, so omitted optional fields are cleared.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PromptRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl PromptRequest {
    pub fn into_draft(self) -> Result<PromptDraft, TagError> {
        let tags = normalize_tags(self.tags, false)?.unwrap_or_default();
        Ok(PromptDraft {
            title: self.title,
            content: self.content,
            description: self.description,
            collection_id: self.collection_id,
            tags,
        })
    }
}

/// Body for `PATCH /prompts/{id}`. Absent and `null` fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchPromptRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl PatchPromptRequest {
    pub fn into_patch(self) -> Result<PromptPatch, TagError> {
        let tags = normalize_tags(self.tags, true)?;
        Ok(PromptPatch {
            title: self.title,
            content: self.content,
            description: self.description,
            collection_id: self.collection_id,
            tags,
        })
    }
}

/// Complete set of writable prompt fields with tags already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub tags: Vec<String>,
}

/// Partial set of writable prompt fields with tags already normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PromptPatch {
    /// Merge onto the current prompt. Only fields carried by the patch change.
    pub fn apply_to(self, current: &Prompt) -> Prompt {
        Prompt {
            id: current.id.clone(),
            title: self.title.unwrap_or_else(|| current.title.clone()),
            content: self.content.unwrap_or_else(|| current.content.clone()),
            description: self.description.or_else(|| current.description.clone()),
            collection_id: self.collection_id.or_else(|| current.collection_id.clone()),
            tags: self.tags.unwrap_or_else(|| current.tags.clone()),
            created_at: current.created_at,
            updated_at: Utc::now(),
        }
    }
}

/// Query parameters for `GET /prompts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPromptsQuery {
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    /// Comma separated; a prompt must carry every listed tag.
    #[serde(default)]
    pub tags: Option<String>,
}

/// Response body for prompt listings.
#[derive(Debug, Serialize)]
pub struct PromptList {
    pub prompts: Vec<Prompt>,
    pub total: usize,
}

impl From<Vec<Prompt>> for PromptList {
    fn from(prompts: Vec<Prompt>) -> Self {
        let total = prompts.len();
        Self { prompts, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prompt() -> Prompt {
        Prompt::from_draft(PromptDraft {
            title: "Summarize".to_string(),
            content: "Summarize the text.".to_string(),
            description: Some("General summarization".to_string()),
            collection_id: Some("col-1".to_string()),
            tags: vec!["writing".to_string()],
        })
    }

    #[test]
    fn test_request_tags_default_to_empty() {
        let request: PromptRequest =
            serde_json::from_value(serde_json::json!({"title": "T", "content": "C"})).unwrap();
        let draft = request.into_draft().unwrap();
        assert!(draft.tags.is_empty());
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_request_null_tags_default_to_empty() {
        let request: PromptRequest = serde_json::from_value(
            serde_json::json!({"title": "T", "content": "C", "tags": null}),
        )
        .unwrap();
        assert!(request.into_draft().unwrap().tags.is_empty());
    }

    #[test]
    fn test_request_length_limits() {
        let ok: PromptRequest = serde_json::from_value(
            serde_json::json!({"title": "t".repeat(200), "content": "C"}),
        )
        .unwrap();
        assert!(ok.validate().is_ok());

        let long_title: PromptRequest = serde_json::from_value(
            serde_json::json!({"title": "t".repeat(201), "content": "C"}),
        )
        .unwrap();
        assert!(long_title.validate().is_err());

        let empty_content: PromptRequest =
            serde_json::from_value(serde_json::json!({"title": "T", "content": ""})).unwrap();
        assert!(empty_content.validate().is_err());

        let long_description: PromptRequest = serde_json::from_value(serde_json::json!({
            "title": "T",
            "content": "C",
            "description": "d".repeat(501)
        }))
        .unwrap();
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_patch_without_tags_keeps_them_unset() {
        let request: PatchPromptRequest =
            serde_json::from_value(serde_json::json!({"title": "New"})).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_patch().unwrap().tags, None);
    }

    #[test]
    fn test_patch_empty_title_rejected() {
        let request: PatchPromptRequest =
            serde_json::from_value(serde_json::json!({"title": ""})).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_patch_merge_keeps_absent_fields() {
        let current = sample_prompt();
        let patch = PromptPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        let merged = patch.apply_to(&current);
        assert_eq!(merged.id, current.id);
        assert_eq!(merged.title, "Renamed");
        assert_eq!(merged.content, current.content);
        assert_eq!(merged.description, current.description);
        assert_eq!(merged.collection_id, current.collection_id);
        assert_eq!(merged.tags, current.tags);
        assert_eq!(merged.created_at, current.created_at);
        assert!(merged.updated_at >= current.updated_at);
    }

    #[test]
    fn test_patch_merge_replaces_tags_entirely() {
        let current = sample_prompt();
        let patch = PromptPatch {
            tags: Some(vec![]),
            ..Default::default()
        };
        assert!(patch.apply_to(&current).tags.is_empty());
    }
}
