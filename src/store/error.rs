use crate::models::TagError;

/// Failures surfaced by the prompt and collection store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Version {version_number} not found for prompt {prompt_id}")]
    VersionNotFound {
        prompt_id: String,
        version_number: i64,
    },

    /// A prompt referenced a collection that does not exist.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Invalid tags: {0}")]
    InvalidTags(#[from] TagError),

    #[error("Internal store error: {0}")]
    Internal(String),
}
